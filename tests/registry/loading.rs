use std::io::Write;

use defang_schemes::{DefangError, Registry, Status};

#[test]
fn load_reads_json_dump_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"name": "xmpp", "status": "Permanent"}}, {{"name": "fax", "status": "Historical"}}]"#
    )
    .unwrap();

    let reg = Registry::load(file.path()).unwrap();
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.records()[0].name, "fax");
    assert_eq!(reg.get("xmpp").unwrap().status, Status::Permanent);
}

#[test]
fn load_reports_missing_file_and_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Registry::load(dir.path().join("missing.json")),
        Err(DefangError::Io(_))
    ));

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"[{"name": "xmpp", "status": "Obsolete"}]"#).unwrap();
    assert!(matches!(
        Registry::load(&bad),
        Err(DefangError::Serialization(_))
    ));
}

#[test]
fn load_rejects_duplicate_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.json");
    std::fs::write(
        &path,
        r#"[{"name": "ssh", "status": "Provisional"}, {"name": "ssh", "status": "Permanent"}]"#,
    )
    .unwrap();
    assert!(matches!(
        Registry::load(&path),
        Err(DefangError::DuplicateScheme(n)) if n == "ssh"
    ));
}

#[test]
fn registry_deserializes_directly() {
    let reg: Registry =
        serde_json::from_str(r#"[{"name": "tel", "status": "Permanent"}]"#).unwrap();
    assert!(reg.contains("tel"));
    assert!(serde_json::from_str::<Registry>(r#"[{"name": "T", "status": "Permanent"}]"#).is_err());
}
