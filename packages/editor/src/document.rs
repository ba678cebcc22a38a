//! # Document Handle
//!
//! The page being edited: an ordered list of blocks plus page metadata.
//!
//! ## Lifecycle
//!
//! ```text
//! Load/Create → Edit → Snapshot → Auto-save
//!      ↓          ↓        ↓           ↓
//!    Store    Mutations   Page       Store
//! ```

use crate::EditorError;
use chrono::Utc;
use folio_common::{Block, NewPage, Page};
use folio_store::PageStore;
use rand::Rng;

/// Editable page
#[derive(Debug, Clone)]
pub struct Document {
    /// Current version number (increments on each effective mutation)
    pub version: u64,

    page: Page,
}

impl Document {
    pub fn new(page: Page) -> Self {
        Self { version: 0, page }
    }

    /// Load a page by id
    pub async fn load<S: PageStore>(store: &S, page_id: u64) -> Result<Self, EditorError> {
        let page = store.get(page_id).await?;
        Ok(Self::new(page))
    }

    /// Open the main page of a portfolio
    ///
    /// The first page of the portfolio is its main page. A portfolio without
    /// pages gets an empty "Home" page created in the store.
    pub async fn open_main<S: PageStore>(
        store: &S,
        portfolio_id: u64,
    ) -> Result<Self, EditorError> {
        let pages = store.get_by_portfolio(portfolio_id).await?;
        let page = match pages.into_iter().next() {
            Some(page) => page,
            None => {
                tracing::info!(portfolio_id, "no pages yet, creating home page");
                store.create(NewPage::home(portfolio_id)).await?
            }
        };
        Ok(Self::new(page))
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn id(&self) -> u64 {
        self.page.id
    }

    pub fn blocks(&self) -> &[Block] {
        &self.page.blocks
    }

    pub fn len(&self) -> usize {
        self.page.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.page.blocks.is_empty()
    }

    pub fn find_block(&self, id: &str) -> Option<&Block> {
        self.page.blocks.iter().find(|b| b.id == id)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.page.blocks.iter().position(|b| b.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    /// Block id not used by any block on this page
    pub fn fresh_block_id(&self) -> String {
        loop {
            let id = new_block_id();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    pub(crate) fn push_block(&mut self, block: Block) {
        self.page.blocks.push(block);
    }

    /// Replace the block at `index`, keeping its stored id and type
    pub(crate) fn replace_block(&mut self, index: usize, block: Block) {
        let slot = &mut self.page.blocks[index];
        slot.content = block.content;
        slot.style = block.style;
        slot.position = block.position;
    }

    pub(crate) fn remove_block(&mut self, index: usize) -> Block {
        self.page.blocks.remove(index)
    }

    /// Copy of the page for persisting, stamped with the send time
    pub fn snapshot(&mut self) -> Page {
        self.page.updated_at = Utc::now();
        self.page.clone()
    }
}

/// Generate a block id: `block_<unix millis>_<9 base-36 chars>`
pub fn new_block_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .filter_map(|_| char::from_digit(rng.gen_range(0..36), 36))
        .collect();
    format!("block_{}_{}", millis, suffix)
}
