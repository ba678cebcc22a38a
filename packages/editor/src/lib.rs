//! # Folio Editor
//!
//! Block editing engine for the portfolio builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ store: pages, portfolios, templates         │
//! └─────────────────────────────────────────────┘
//!                     ↓ load            ↑ auto-save (fire-and-forget)
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Document (ordered blocks)                │
//! │  - Mutations: add / update / delete         │
//! │  - Selection (zero or one block)            │
//! │  - Drop target for palette drags            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ canvas: Block → BlockView (pure)            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **In-memory document is the source of truth** for the session
//! 2. **Persistence is best-effort**: a failed save is logged, never rolled back
//! 3. **Stale ids are no-ops**: updating or deleting a missing block changes nothing
//! 4. **Open block types**: unknown type tags render as a generic block
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_editor::{AutoSaver, Document, EditSession};
//! use folio_common::BlockKind;
//!
//! let document = Document::open_main(pages.as_ref(), portfolio_id).await?;
//! let mut session = EditSession::new(document)
//!     .with_persister(Arc::new(AutoSaver::new(pages.clone())));
//!
//! let block = session.add_block(BlockKind::Text)?;
//! session.set_content_field(&block.id, "title", "Hi".into());
//! let canvas = session.canvas();
//! ```

mod autosave;
mod canvas;
mod document;
mod drop_target;
mod errors;
mod mutations;
mod registry;
mod selection;
mod session;

pub use autosave::{AutoSaver, PersistHandle, Persister};
pub use canvas::{render_block, render_canvas, BlockBody, BlockView, CanvasView, SocialLink};
pub use document::{new_block_id, Document};
pub use drop_target::DropTarget;
pub use errors::EditorError;
pub use mutations::{Mutation, MutationError, MutationResult};
pub use registry::{BlockRegistry, BlockSpec, PaletteEntry};
pub use selection::Selection;
pub use session::EditSession;

// Re-export the data model for convenience
pub use folio_common::{Block, BlockKind, Content, Page, Position};
