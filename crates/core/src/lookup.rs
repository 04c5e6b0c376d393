// Type-filtered queries over a loaded states document

use crate::types::{StateEntry, StateId, StateKind, StatesDocument};

impl StatesDocument {
    /// All `(id, seed)` pairs whose entry carries the given kind, in
    /// document order. Empty when nothing matches.
    pub fn list_by_kind(&self, kind: StateKind) -> Vec<(StateId, String)> {
        self.states
            .iter()
            .filter(|(_, entry)| entry.kind == kind)
            .map(|(id, entry)| (id.clone(), entry.seed_text().to_string()))
            .collect()
    }

    /// Entry registered under `id` with the given kind. `None` covers both
    /// an unknown id and an id registered under the other kind.
    pub fn find(&self, kind: StateKind, id: &StateId) -> Option<&StateEntry> {
        self.states.get(id).filter(|entry| entry.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> StatesDocument {
        serde_json::from_value(serde_json::json!({
            "states": {
                "Ada": {
                    "type": "personality",
                    "seed": "precise and analytical",
                    "activation": "I am Ada."
                },
                "deep_research_mode": {
                    "type": "focus",
                    "seed": "sustained analytical attention"
                },
                "quick_triage": {
                    "type": "focus"
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_list_by_kind_selects_matching_pairs() {
        let doc = sample_doc();

        let focus = doc.list_by_kind(StateKind::Focus);
        assert_eq!(
            focus,
            vec![
                (
                    StateId::new("deep_research_mode"),
                    "sustained analytical attention".to_string()
                ),
                (StateId::new("quick_triage"), String::new()),
            ]
        );

        let personalities = doc.list_by_kind(StateKind::Personality);
        assert_eq!(
            personalities,
            vec![(
                StateId::new("Ada"),
                "precise and analytical".to_string()
            )]
        );
    }

    #[test]
    fn test_list_by_kind_empty_when_nothing_matches() {
        let doc: StatesDocument = serde_json::from_value(serde_json::json!({
            "states": {"only": {"type": "focus"}}
        }))
        .unwrap();
        assert!(doc.list_by_kind(StateKind::Personality).is_empty());
    }

    #[test]
    fn test_find_returns_whole_entry() {
        let doc = sample_doc();
        let id = StateId::new("Ada");

        let entry = doc.find(StateKind::Personality, &id).unwrap();
        assert_eq!(entry, &doc.states[&id]);
        assert_eq!(entry.extra["activation"], serde_json::json!("I am Ada."));
    }

    #[test]
    fn test_find_kind_mismatch_is_none() {
        let doc = sample_doc();
        // "Ada" exists, but as a personality
        assert!(doc.find(StateKind::Focus, &StateId::new("Ada")).is_none());
        assert!(doc
            .find(StateKind::Personality, &StateId::new("quick_triage"))
            .is_none());
    }

    #[test]
    fn test_find_unknown_id_is_none() {
        let doc = sample_doc();
        assert!(doc.find(StateKind::Focus, &StateId::new("xyzzy")).is_none());
    }
}
