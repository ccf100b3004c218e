use mgen_core::errors::{ErrorInfo, MgenError};
use mgen_core::provenance::{RunProvenance, SchemaVersion};

#[test]
fn provenance_round_trip_json() {
    let provenance = RunProvenance::for_input("input", "mgen-core", "0.1.0").with_seed(99);
    assert_eq!(provenance.schema_version, SchemaVersion::new(1, 0, 0));

    let json = serde_json::to_string_pretty(&provenance).expect("serialize");
    let decoded: RunProvenance = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, provenance);
    assert_eq!(decoded.tool_versions["mgen-core"], "0.1.0");
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = MgenError::Word(ErrorInfo::new("bad-value", "not a number").with_context("atom", "0"));
    let value = serde_json::to_value(&err).expect("serialize");
    assert_eq!(value["family"], "Word");
    assert_eq!(value["detail"]["code"], "bad-value");

    let decoded: MgenError = serde_json::from_value(value).expect("deserialize");
    assert_eq!(decoded, err);
}
