//! # Folio Workspace
//!
//! Application shell around the editor: the builder service that opens
//! sessions, publishes and seeds portfolios, and the HTTP API serving it.

pub mod builder;
pub mod error;
pub mod server;
pub mod state;

pub use builder::{Builder, DashboardStats, InMemoryBuilder, Preview, TemplateFilter};
pub use error::BuilderError;
pub use server::{router, serve};
pub use state::{BuilderState, WorkspaceState};
