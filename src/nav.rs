pub mod graph;
pub mod types;

// Re-exports
pub use graph::NavGraph;
pub use types::{AppScreen, NavError, NavMode};
