//! Shared data model for the Folio builder.
//!
//! A portfolio owns pages; a page is an ordered list of typed content
//! blocks. Everything here is plain data with the JSON shape used by the
//! fixture files and the HTTP API.

pub mod block;
pub mod content;
pub mod page;
pub mod portfolio;
pub mod template;

pub use block::*;
pub use content::*;
pub use page::*;
pub use portfolio::*;
pub use template::*;
