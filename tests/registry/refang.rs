use defang_schemes::defang::uri::{defang_uri, refang_uri};
use defang_schemes::{Status, VerifyConfig};

use crate::common::iana_registry;

#[test]
fn every_permanent_scheme_refangs_to_itself() {
    let permanent = iana_registry().with_status(Status::Permanent);
    let table = permanent.refang_table().unwrap();
    assert_eq!(table.len(), permanent.len());
    for pair in permanent.defanged_pairs().unwrap() {
        assert_eq!(table.refang(&pair.defanged), Some(pair.original.as_str()));
    }
}

#[test]
fn full_snapshot_refuses_refang_table() {
    // iris/ircs share a defanged form outside the exemption set
    assert!(iana_registry().refang_table().is_err());
    let table = iana_registry()
        .refang_table_with_config(&VerifyConfig::permanent_only())
        .unwrap();
    assert_eq!(table.refang("irxs"), Some("iris"));
}

#[test]
fn uri_round_trip_through_table() {
    let table = iana_registry()
        .with_status(Status::Permanent)
        .refang_table()
        .unwrap();
    for uri in [
        "https://example.com/path?q=1",
        "mailto:someone@example.com",
        "coap+tcp://[::1]:5683/",
        "xmlrpc.beeps://host",
        "ws://socket",
    ] {
        let defanged = defang_uri(uri);
        assert_ne!(defanged, uri);
        assert_eq!(refang_uri(&defanged, &table), uri);
    }
}
