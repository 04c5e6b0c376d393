use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique identifier for a state entry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateId(pub String);

impl StateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a state entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateKind {
    /// Concentrates attention on a task without changing identity
    Focus,
    /// A full identity/behavioral substitution
    Personality,
}

impl StateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StateKind::Focus => "focus",
            StateKind::Personality => "personality",
        }
    }
}

impl std::fmt::Display for StateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One focus or personality configuration
///
/// Only `type` and `seed` are interpreted. Everything else (narrative text,
/// activation instructions, voice notes) is opaque payload carried through
/// unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateEntry {
    #[serde(rename = "type")]
    pub kind: StateKind,
    /// Short descriptive string shown in listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StateEntry {
    /// Seed text for listings; an absent seed renders as the empty string
    pub fn seed_text(&self) -> &str {
        self.seed.as_deref().unwrap_or("")
    }
}

/// Root of the states document: entries keyed by id
///
/// Read fresh from the backing store for every operation and never mutated
/// in memory. A document without a top-level `states` field parses as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatesDocument {
    #[serde(default)]
    pub states: BTreeMap<StateId, StateEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(StateKind::Focus).unwrap(),
            serde_json::json!("focus")
        );
        assert_eq!(
            serde_json::to_value(StateKind::Personality).unwrap(),
            serde_json::json!("personality")
        );
    }

    #[test]
    fn test_entry_preserves_opaque_payload() {
        let raw = serde_json::json!({
            "type": "personality",
            "seed": "precise and analytical",
            "activation": "I am Ada.",
            "traits": {"voice": "measured", "depth": 3}
        });

        let entry: StateEntry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.kind, StateKind::Personality);
        assert_eq!(entry.seed_text(), "precise and analytical");
        assert_eq!(
            entry.extra.get("traits").unwrap()["voice"],
            serde_json::json!("measured")
        );

        // Serializing back yields the same field set
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }

    #[test]
    fn test_entry_without_seed() {
        let entry: StateEntry =
            serde_json::from_value(serde_json::json!({"type": "focus"})).unwrap();
        assert_eq!(entry.seed, None);
        assert_eq!(entry.seed_text(), "");

        // An absent seed stays absent on the wire
        let round = serde_json::to_value(&entry).unwrap();
        assert!(round.get("seed").is_none());
    }

    #[test]
    fn test_entry_rejects_unknown_kind() {
        let result: Result<StateEntry, _> =
            serde_json::from_value(serde_json::json!({"type": "mood"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_document_without_states_field_is_empty() {
        let doc: StatesDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.states.is_empty());
    }
}
