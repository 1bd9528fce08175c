// tests/manual.rs
use logo_turtle::{CommandRegistry, Manual, ManualError};

#[test]
fn test_standard_manual_documents_every_command() {
    let manual = Manual::standard();
    let registry = CommandRegistry::standard();

    for name in registry.names() {
        assert!(manual.get(name).is_some(), "no manual entry for {name}");
    }
    assert_eq!(manual.commands.len(), registry.names().len());
    assert_eq!(manual.get("repeat").unwrap().name, "Repeat");
}

#[test]
fn test_manual_json_format() {
    let json = r#"{
        "commands": [
            { "name": "Forward", "code": "fd 100", "desc": "Moves forward." },
            { "name": "Pen up", "code": "pu", "desc": "Stops drawing." }
        ]
    }"#;

    let manual = Manual::from_json(json).unwrap();
    assert_eq!(manual.commands.len(), 2);
    assert_eq!(manual.get("fd").unwrap().desc, "Moves forward.");
    assert!(manual.get("rt").is_none());

    let reparsed = Manual::from_json(&manual.to_json().unwrap()).unwrap();
    assert_eq!(reparsed, manual);
}

#[test]
fn test_manual_errors() {
    assert!(matches!(
        Manual::from_json(r#"{ "commands": [ { "name": "x" } ] }"#),
        Err(ManualError::Json(_))
    ));

    let err = Manual::load("/nonexistent/commands.json").unwrap_err();
    assert!(matches!(err, ManualError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/commands.json"));
}
