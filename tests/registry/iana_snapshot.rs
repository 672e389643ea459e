use defang_schemes::{
    verify, verify_with_config, DefangError, Status, VerifyConfig, VerifyWarning, Violation,
};

use crate::common::iana_registry;

#[test]
fn snapshot_has_expected_shape() {
    let reg = iana_registry();
    assert_eq!(reg.len(), 130);
    assert_eq!(reg.with_status(Status::Permanent).len(), 96);
    assert_eq!(reg.get("hxxp").unwrap().status, Status::Provisional);
}

#[test]
fn permanent_schemes_verify_cleanly() {
    let reg = iana_registry();
    let report = verify_with_config(reg.records(), &VerifyConfig::permanent_only()).unwrap();
    assert_eq!(report.checked, 96);
    assert!(report.is_clean());

    // hxxp[s] are provisional, so nothing defangs into a permanent scheme
    let permanent = reg.with_status(Status::Permanent);
    for p in &report.pairs {
        assert_ne!(p.original, p.defanged);
        assert!(permanent.get(&p.defanged).is_none(), "{p}");
    }
}

#[test]
fn full_snapshot_flags_iris_ircs_ambiguity() {
    // ircs is provisional; iris is permanent. Both become irxs under the 4-letter rule.
    let reg = iana_registry();
    let err = verify(reg.records()).unwrap_err();
    let DefangError::Verification(failure) = err else {
        panic!("expected verification failure");
    };
    assert_eq!(
        failure.violations,
        vec![Violation::RegistryAmbiguity {
            defanged: "irxs".to_string(),
            offenders: vec!["ircs".to_string(), "iris".to_string()],
        }]
    );
}

#[test]
fn http_convention_is_the_only_exempted_collision() {
    let reg = iana_registry();
    let without_ircs: Vec<_> = reg
        .iter()
        .filter(|r| r.name != "ircs")
        .cloned()
        .collect();
    let report = verify(&without_ircs).unwrap();
    assert_eq!(report.warnings, vec![VerifyWarning::ExemptedConvention { count: 2 }]);
    let exempt: Vec<&str> = report.exempted.iter().map(|v| v.defanged()).collect();
    assert_eq!(exempt, vec!["hxxp", "hxxps"]);
}

#[test]
fn reserved_character_schemes_are_bracketed() {
    let reg = iana_registry();
    for pair in reg.defanged_pairs().unwrap() {
        if pair.original.contains(['-', '+', '.']) {
            assert!(pair.defanged.contains('['), "{pair}");
            assert_eq!(
                pair.defanged.replace(['[', ']'], ""),
                pair.original,
                "{pair}"
            );
        }
    }
}
