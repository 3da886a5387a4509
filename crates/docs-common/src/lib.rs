pub mod catalog;
pub mod error;
pub mod mcp_api;
pub mod model;
pub mod render;
pub mod search;
pub mod store;
