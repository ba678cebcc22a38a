use crate::block::Block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A portfolio page: an ordered list of blocks plus page metadata
///
/// Block order is visual stacking order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(rename = "Id")]
    pub id: u64,
    pub portfolio_id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub settings: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a page that has not been stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPage {
    pub portfolio_id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub settings: Map<String, Value>,
}

impl NewPage {
    /// Empty "Home" page, created when a portfolio has no pages yet
    pub fn home(portfolio_id: u64) -> Self {
        Self {
            portfolio_id,
            title: "Home".to_string(),
            slug: "home".to_string(),
            blocks: Vec::new(),
            settings: Map::new(),
        }
    }

    pub fn into_page(self, id: u64, now: DateTime<Utc>) -> Page {
        Page {
            id,
            portfolio_id: self.portfolio_id,
            title: self.title,
            slug: self.slug,
            blocks: self.blocks,
            settings: self.settings,
            created_at: now,
            updated_at: now,
        }
    }
}
