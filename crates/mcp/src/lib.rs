// MCP (Model Context Protocol) server for the Hyperfocus states catalog
// Exposes list/load tools to agent clients over JSON-RPC on stdio

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
