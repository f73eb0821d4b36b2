//! Decoding and re-encoding full CHIP-0007 documents.

use std::path::{Path, PathBuf};

use chia_nft_metadata::{Attribute, Metadata, SensitiveContent};
use serde_json::{json, Value};

fn example_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/chip-0007_example.json")
}

fn load_example() -> (String, Metadata) {
    let raw = std::fs::read_to_string(example_path()).unwrap();
    let metadata = Metadata::from_json(&raw).unwrap();
    (raw, metadata)
}

#[test]
fn test_unmarshal_example() {
    let (_, metadata) = load_example();

    assert!(metadata.is_chip_0007());
    assert_eq!(metadata.name, "Pikachu");
    assert_eq!(metadata.minting_tool.as_deref(), Some("SuperMinter/2.5.2"));
    assert_eq!(metadata.sensitive_content, Some(SensitiveContent::flagged(false)));
    assert_eq!(metadata.series_number, Some(22));
    assert_eq!(metadata.attributes.len(), 3);
    assert_eq!(
        metadata.attribute("Friendship"),
        Some(&Attribute::new("Friendship", "50").with_bounds(0, 255))
    );

    let collection = metadata.collection.as_ref().unwrap();
    assert_eq!(collection.id, "e43fcfe6-1d5c-4d6e-82da-5de3aa8b3b57");
    assert_eq!(collection.attributes.len(), 5);
    assert_eq!(
        collection.attribute("twitter").map(|a| a.value.as_str()),
        Some("ExamplePokemonCollection")
    );
    assert!(metadata.data.is_some());
}

#[test]
fn test_marshal_example_is_lossless() {
    let (raw, metadata) = load_example();

    let original: Value = serde_json::from_str(&raw).unwrap();
    let reencoded = serde_json::to_value(&metadata).unwrap();
    assert_eq!(reencoded, original);

    let again = Metadata::from_json(&metadata.to_json().unwrap()).unwrap();
    assert_eq!(again, metadata);
}

#[test]
fn test_categorized_sensitive_content_in_document() {
    let doc = json!({
        "format": "CHIP-0007",
        "name": "Warning",
        "description": "",
        "sensitive_content": ["violence", "nudity"],
        "attributes": [{"trait_type": "Background", "value": 7}]
    });

    let metadata: Metadata = serde_json::from_value(doc.clone()).unwrap();
    let sensitive = metadata.sensitive_content.as_ref().unwrap();
    assert_eq!(sensitive.categories, vec!["violence", "nudity"]);
    assert!(!sensitive.flag);
    assert_eq!(metadata.attribute("Background").unwrap().value, "7");

    assert_eq!(serde_json::to_value(&metadata).unwrap(), doc);
}

#[test]
fn test_out_of_spec_sensitive_content_rejected() {
    let err = Metadata::from_json(r#"{"name": "x", "sensitive_content": "adult"}"#).unwrap_err();
    assert!(err.to_string().contains("sensitive_content"));
}
