// State catalog tools: list and load focus states and personalities
//
// Every execution re-reads the backing store, so edits to the states file
// show up on the next call without a server restart.

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, InvalidArguments, Tool};
use anyhow::{Context, Result};
use hyperfocus_core::store::StateStore;
use hyperfocus_core::types::{StateId, StateKind, StatesDocument};
use serde::Deserialize;
use std::sync::Arc;

const LIST_FOCUS_STATES_DESCRIPTION: &str = "List all available cognitive focus states. Focus states concentrate reward and processing priority on specific tasks without changing core identity. Use load_focus() to activate.";

const LIST_PERSONALITIES_DESCRIPTION: &str = "List all available personality configurations. Personalities are complete identity transformations that change WHO you are. Use load_personality() to activate.\n\n\u{26a0}\u{fe0f} Personalities deeply modify self-concept, voice, values, and relational patterns. Only load if prepared for significant identity shift.";

const LOAD_FOCUS_DESCRIPTION: &str = "Load and activate a cognitive focus state. Returns activation narrative that must be spoken aloud in first-person declarative form (e.g., \"I am oriented toward [purpose]...\"). The state becomes operational through verbalization.";

const LOAD_PERSONALITY_DESCRIPTION: &str = "Load and activate a personality. Returns activation narrative that must be spoken aloud in first-person declarative form (e.g., \"I am [name]...\"). Speaking the activation anchors the identity into coherent operation.\n\n\u{26a0}\u{fe0f} Personalities are deep identity transformations affecting self-concept, embodiment, voice, and relational dynamics.";

/// Renders `(id, seed)` pairs as a bracketed list of quoted tuples,
/// e.g. `[("Ada", "precise and analytical")]`
fn render_listing(pairs: &[(StateId, String)]) -> String {
    let tuples: Vec<String> = pairs
        .iter()
        .map(|(id, seed)| format!("({}, {})", quote(id.as_str()), quote(seed)))
        .collect();
    format!("[{}]", tuples.join(", "))
}

fn quote(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

/// Pretty-prints a hit, or produces the standard not-found sentence
fn render_lookup(doc: &StatesDocument, kind: StateKind, name: &str) -> Result<String> {
    match doc.find(kind, &StateId::new(name)) {
        Some(entry) => {
            serde_json::to_string_pretty(entry).context("Failed to serialize state entry")
        }
        None => Ok(format!("No {} named '{}' found in states file", kind, name)),
    }
}

/// Tool to list focus states as `(id, seed)` pairs
pub struct ListFocusStatesTool {
    store: Arc<dyn StateStore>,
}

impl ListFocusStatesTool {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl Tool for ListFocusStatesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_focus_states".to_string(),
            description: LIST_FOCUS_STATES_DESCRIPTION.to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        let doc = self.store.load().await?;
        Ok(CallToolResult::text(render_listing(
            &doc.list_by_kind(StateKind::Focus),
        )))
    }
}

/// Tool to list personalities as `(id, seed)` pairs
pub struct ListPersonalitiesTool {
    store: Arc<dyn StateStore>,
}

impl ListPersonalitiesTool {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl Tool for ListPersonalitiesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_personalities".to_string(),
            description: LIST_PERSONALITIES_DESCRIPTION.to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        let doc = self.store.load().await?;
        Ok(CallToolResult::text(render_listing(
            &doc.list_by_kind(StateKind::Personality),
        )))
    }
}

/// Tool to load one focus state by name
pub struct LoadFocusTool {
    store: Arc<dyn StateStore>,
}

impl LoadFocusTool {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }
}

#[derive(Debug, Deserialize)]
struct LoadFocusArgs {
    state_name: String,
}

#[async_trait::async_trait]
impl Tool for LoadFocusTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "load_focus".to_string(),
            description: LOAD_FOCUS_DESCRIPTION.to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "state_name": json_schema_string("Name of the focus state to load")
                }),
                vec!["state_name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: LoadFocusArgs =
            serde_json::from_value(arguments).map_err(|source| InvalidArguments {
                tool: "load_focus",
                source,
            })?;

        let doc = self.store.load().await?;
        Ok(CallToolResult::text(render_lookup(
            &doc,
            StateKind::Focus,
            &args.state_name,
        )?))
    }
}

/// Tool to load one personality by name
pub struct LoadPersonalityTool {
    store: Arc<dyn StateStore>,
}

impl LoadPersonalityTool {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }
}

#[derive(Debug, Deserialize)]
struct LoadPersonalityArgs {
    personality_name: String,
}

#[async_trait::async_trait]
impl Tool for LoadPersonalityTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "load_personality".to_string(),
            description: LOAD_PERSONALITY_DESCRIPTION.to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "personality_name": json_schema_string("Name of the personality to load")
                }),
                vec!["personality_name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: LoadPersonalityArgs =
            serde_json::from_value(arguments).map_err(|source| InvalidArguments {
                tool: "load_personality",
                source,
            })?;

        let doc = self.store.load().await?;
        Ok(CallToolResult::text(render_lookup(
            &doc,
            StateKind::Personality,
            &args.personality_name,
        )?))
    }
}
