//! # Builder Service
//!
//! Portfolio-level operations behind the dashboard, template gallery,
//! builder and preview screens.

use crate::error::BuilderError;
use chrono::Utc;
use folio_common::{NewPortfolio, Page, Portfolio, Template};
use folio_editor::{
    render_canvas, AutoSaver, BlockRegistry, CanvasView, Document, EditSession, PaletteEntry,
};
use folio_store::{
    InMemoryPageStore, InMemoryPortfolioStore, InMemoryTemplateStore, PageStore, PortfolioStore,
    StoreResult, TemplateStore,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type InMemoryBuilder = Builder<InMemoryPageStore, InMemoryPortfolioStore, InMemoryTemplateStore>;

pub struct Builder<P, F, T> {
    pages: Arc<P>,
    portfolios: Arc<F>,
    templates: Arc<T>,
    registry: Arc<BlockRegistry>,
}

/// Read-only rendering of a portfolio's main page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub portfolio: Portfolio,
    pub page: Option<Page>,
    pub canvas: CanvasView,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_portfolios: usize,
    pub published: usize,
    pub total_views: u64,
}

/// Template gallery filter. A category of `"all"` matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateFilter {
    pub category: Option<String>,
    #[serde(rename = "q")]
    pub query: Option<String>,
}

impl InMemoryBuilder {
    /// Builder over in-memory stores seeded from the bundled fixtures
    pub fn with_fixtures() -> StoreResult<Self> {
        Ok(Self::new(
            Arc::new(InMemoryPageStore::with_fixtures()?),
            Arc::new(InMemoryPortfolioStore::with_fixtures()?),
            Arc::new(InMemoryTemplateStore::with_fixtures()?),
        ))
    }
}

impl<P, F, T> Builder<P, F, T>
where
    P: PageStore,
    F: PortfolioStore,
    T: TemplateStore,
{
    pub fn new(pages: Arc<P>, portfolios: Arc<F>, templates: Arc<T>) -> Self {
        Self {
            pages,
            portfolios,
            templates,
            registry: Arc::new(BlockRegistry::builtin()),
        }
    }

    pub fn pages(&self) -> &Arc<P> {
        &self.pages
    }

    pub fn portfolios(&self) -> &Arc<F> {
        &self.portfolios
    }

    pub fn palette(&self) -> Vec<PaletteEntry> {
        self.registry.palette()
    }

    /// Start editing a portfolio's main page
    ///
    /// Fails if the portfolio does not exist. Creates an empty "Home" page
    /// when the portfolio has none.
    pub async fn open_builder(
        &self,
        portfolio_id: u64,
    ) -> Result<(Portfolio, EditSession), BuilderError> {
        let portfolio = self.portfolios.get(portfolio_id).await?;
        let document = Document::open_main(self.pages.as_ref(), portfolio_id).await?;

        tracing::info!(
            portfolio_id,
            page_id = document.id(),
            blocks = document.len(),
            "builder session opened"
        );

        let session = EditSession::new(document)
            .with_registry(self.registry.clone())
            .with_persister(Arc::new(AutoSaver::new(self.pages.clone())));
        Ok((portfolio, session))
    }

    pub async fn preview(&self, portfolio_id: u64) -> Result<Preview, BuilderError> {
        let portfolio = self.portfolios.get(portfolio_id).await?;
        let page = self
            .pages
            .get_by_portfolio(portfolio_id)
            .await?
            .into_iter()
            .next();

        let blocks = page.as_ref().map(|p| p.blocks.as_slice()).unwrap_or_default();
        let canvas = render_canvas(blocks, None);
        Ok(Preview {
            portfolio,
            page,
            canvas,
        })
    }

    pub async fn publish(&self, portfolio_id: u64) -> Result<Portfolio, BuilderError> {
        let portfolio = self.portfolios.get(portfolio_id).await?;
        let published = self
            .portfolios
            .update(
                portfolio_id,
                Portfolio {
                    published: true,
                    updated_at: Utc::now(),
                    ..portfolio
                },
            )
            .await?;

        tracing::info!(portfolio_id, subdomain = %published.subdomain, "portfolio published");
        Ok(published)
    }

    /// Create an unpublished portfolio from a catalog template
    pub async fn create_from_template(&self, template_id: u64) -> Result<Portfolio, BuilderError> {
        let template = self.templates.get(template_id).await?;
        let portfolio = self
            .portfolios
            .create(NewPortfolio {
                name: format!("{} Portfolio", template.name),
                subdomain: format!("portfolio-{}", Utc::now().timestamp_millis()),
                template: Some(template.id),
                published: false,
                views: 0,
            })
            .await?;

        tracing::info!(
            portfolio_id = portfolio.id,
            template_id,
            "portfolio created from template"
        );
        Ok(portfolio)
    }

    pub async fn list_portfolios(&self) -> Result<Vec<Portfolio>, BuilderError> {
        Ok(self.portfolios.get_all().await?)
    }

    pub async fn delete_portfolio(&self, portfolio_id: u64) -> Result<bool, BuilderError> {
        Ok(self.portfolios.delete(portfolio_id).await?)
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, BuilderError> {
        let portfolios = self.portfolios.get_all().await?;
        Ok(DashboardStats {
            total_portfolios: portfolios.len(),
            published: portfolios.iter().filter(|p| p.published).count(),
            total_views: portfolios.iter().map(|p| p.views).sum(),
        })
    }

    pub async fn templates(&self, filter: &TemplateFilter) -> Result<Vec<Template>, BuilderError> {
        let templates = match filter.category.as_deref() {
            None | Some("all") => self.templates.get_all().await?,
            Some(category) => self.templates.get_by_category(category).await?,
        };

        Ok(match filter.query.as_deref() {
            Some(query) => templates.into_iter().filter(|t| t.matches(query)).collect(),
            None => templates,
        })
    }
}
