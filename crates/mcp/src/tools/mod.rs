pub mod states;
mod registry;

pub use states::{
    ListFocusStatesTool, ListPersonalitiesTool, LoadFocusTool, LoadPersonalityTool,
};
pub use registry::{
    json_schema_object, json_schema_string, InvalidArguments, Tool, ToolRegistry,
};
