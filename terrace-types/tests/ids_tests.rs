use std::collections::HashSet;
use std::str::FromStr;
use terrace_types::{Error, FieldId, ItemId, ModelId, ProjectId, RequestId, UserId, VersionId};

// ── ItemId ────────────────────────────────────────────────────────

#[test]
fn item_id_new_is_unique() {
    let a = ItemId::new();
    let b = ItemId::new();
    assert_ne!(a, b);
}

#[test]
fn item_id_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::now_v7();
    let id = ItemId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn item_id_display_and_parse() {
    let id = ItemId::new();
    let s = id.to_string();
    let parsed = ItemId::parse(&s).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn item_id_from_str() {
    let id = ItemId::new();
    let s = id.to_string();
    let parsed: ItemId = ItemId::from_str(&s).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn item_id_parse_invalid_is_the_shared_error() {
    let err = ItemId::parse("not-a-uuid").unwrap_err();
    assert!(matches!(err, Error::InvalidUuid(_)));
    assert!(err.to_string().starts_with("invalid UUID"));
}

#[test]
fn item_id_from_str_surfaces_the_shared_error() {
    let err = ItemId::from_str("").unwrap_err();
    assert!(matches!(err, Error::InvalidUuid(_)));
}

#[test]
fn item_id_default_is_unique() {
    let a = ItemId::default();
    let b = ItemId::default();
    assert_ne!(a, b);
}

#[test]
fn item_id_hash_and_eq() {
    let id = ItemId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id); // duplicate
    assert_eq!(set.len(), 1);
}

#[test]
fn item_id_serialization_roundtrip() {
    let id = ItemId::new();
    let json = serde_json::to_string(&id).unwrap();
    let parsed: ItemId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn item_id_serializes_as_bare_string() {
    let uuid = uuid::Uuid::now_v7();
    let id = ItemId::from_uuid(uuid);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{uuid}\""));
}

// ── ModelId ───────────────────────────────────────────────────────

#[test]
fn model_id_new_is_unique() {
    let a = ModelId::new();
    let b = ModelId::new();
    assert_ne!(a, b);
}

#[test]
fn model_id_display_and_parse() {
    let id = ModelId::new();
    let parsed = ModelId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn model_id_parse_invalid() {
    assert!(ModelId::parse("garbage").is_err());
}

// ── FieldId ───────────────────────────────────────────────────────

#[test]
fn field_id_display_and_parse() {
    let id = FieldId::new();
    let parsed = FieldId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn field_id_serialization_roundtrip() {
    let id = FieldId::new();
    let json = serde_json::to_string(&id).unwrap();
    let parsed: FieldId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

// ── Remaining ids ─────────────────────────────────────────────────

#[test]
fn version_id_display_and_parse() {
    let id = VersionId::new();
    let parsed = VersionId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn request_id_display_and_parse() {
    let id = RequestId::new();
    let parsed = RequestId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn user_id_display_and_parse() {
    let id = UserId::new();
    let parsed = UserId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn project_id_display_and_parse() {
    let id = ProjectId::new();
    let parsed = ProjectId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn ids_of_different_kinds_are_distinct_types() {
    // Same UUID, different newtypes; both parse and display identically
    let uuid = uuid::Uuid::now_v7();
    let item = ItemId::from_uuid(uuid);
    let model = ModelId::from_uuid(uuid);
    assert_eq!(item.to_string(), model.to_string());
}
