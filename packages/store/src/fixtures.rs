//! Seed data bundled into the binary.

use crate::error::StoreResult;
use folio_common::{Page, Portfolio, Template};

const PAGES: &str = include_str!("../fixtures/pages.json");
const PORTFOLIOS: &str = include_str!("../fixtures/portfolios.json");
const TEMPLATES: &str = include_str!("../fixtures/templates.json");

pub(crate) fn pages() -> StoreResult<Vec<Page>> {
    Ok(serde_json::from_str(PAGES)?)
}

pub(crate) fn portfolios() -> StoreResult<Vec<Portfolio>> {
    Ok(serde_json::from_str(PORTFOLIOS)?)
}

pub(crate) fn templates() -> StoreResult<Vec<Template>> {
    Ok(serde_json::from_str(TEMPLATES)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixtures_parse() {
        assert!(!pages().unwrap().is_empty());
        assert!(!portfolios().unwrap().is_empty());
        assert!(!templates().unwrap().is_empty());
    }

    #[test]
    fn test_fixture_pages_reference_existing_portfolios() {
        let portfolio_ids: HashSet<u64> = portfolios().unwrap().iter().map(|p| p.id).collect();

        for page in pages().unwrap() {
            assert!(
                portfolio_ids.contains(&page.portfolio_id),
                "page {} points at missing portfolio {}",
                page.id,
                page.portfolio_id
            );
        }
    }

    #[test]
    fn test_fixture_block_ids_unique_per_page() {
        for page in pages().unwrap() {
            let ids: HashSet<&str> = page.blocks.iter().map(|b| b.id.as_str()).collect();
            assert_eq!(ids.len(), page.blocks.len());
        }
    }
}
