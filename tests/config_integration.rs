use defang_schemes::config::*;
use defang_schemes::{verify_with_config, SchemeRecord, Status};

fn records() -> Vec<SchemeRecord> {
    vec![
        SchemeRecord::new("http", Status::Permanent).unwrap(),
        SchemeRecord::new("hxxp", Status::Provisional).unwrap(),
        SchemeRecord::new("ftp", Status::Permanent).unwrap(),
    ]
}

#[test]
fn test_verify_config_defaults() {
    let config = VerifyConfig::default();
    assert_eq!(config.exempt_schemes.len(), 4);
    assert!(config.exempt_schemes.contains("hxxps"));
    assert_eq!(config.status_filter, None);
    assert!(config.warn_on_exemption);
}

#[test]
fn test_config_modification() {
    let mut config = VerifyConfig::strict();
    config.exempt_schemes.insert("http".to_string());
    config.exempt_schemes.insert("hxxp".to_string());
    config.warn_on_exemption = false;

    let report = verify_with_config(&records(), &config).unwrap();
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.exempted.len(), 1);
}

#[test]
fn test_partial_exemption_is_fatal() {
    let mut config = VerifyConfig::strict();
    config.exempt_schemes.insert("http".to_string());
    assert!(verify_with_config(&records(), &config).is_err());
}

#[test]
fn test_config_serialization() {
    let config = VerifyConfig::permanent_only();
    let json = serde_json::to_string(&config).unwrap();
    let back: VerifyConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.status_filter, Some(Status::Permanent));
    assert_eq!(back.exempt_schemes, config.exempt_schemes);
}
