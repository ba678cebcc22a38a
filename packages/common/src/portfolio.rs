use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's portfolio site. Owns one or more pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(rename = "Id")]
    pub id: u64,
    pub name: String,
    pub subdomain: String,
    /// Template the portfolio was created from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<u64>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub views: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolio {
    pub name: String,
    pub subdomain: String,
    #[serde(default)]
    pub template: Option<u64>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub views: u64,
}

impl NewPortfolio {
    pub fn into_portfolio(self, id: u64, now: DateTime<Utc>) -> Portfolio {
        Portfolio {
            id,
            name: self.name,
            subdomain: self.subdomain,
            template: self.template,
            published: self.published,
            views: self.views,
            created_at: now,
            updated_at: now,
        }
    }
}
