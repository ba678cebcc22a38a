//! # Folio Stores
//!
//! Persistence collaborators for the builder: pages, portfolios and the
//! template catalog.
//!
//! Each store is a trait so callers can inject their own backend. The
//! in-memory implementations keep records in a `Vec` behind a lock and can
//! be seeded from the bundled fixture files.
//!
//! ```rust,ignore
//! use folio_store::{InMemoryPageStore, PageStore};
//!
//! let pages = InMemoryPageStore::with_fixtures()?;
//! let home = pages.get_by_portfolio(1).await?;
//! ```

mod collection;
mod error;
mod fixtures;
mod latency;
mod page;
mod portfolio;
mod template;

pub use error::{StoreError, StoreResult};
pub use latency::Latency;
pub use page::{InMemoryPageStore, PageStore};
pub use portfolio::{InMemoryPortfolioStore, PortfolioStore};
pub use template::{InMemoryTemplateStore, TemplateStore};
