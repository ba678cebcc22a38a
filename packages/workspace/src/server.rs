// ============================================================================
// HTTP API for the builder front end
// ============================================================================

use crate::builder::{DashboardStats, Preview, TemplateFilter};
use crate::error::BuilderError;
use crate::state::{BuilderState, WorkspaceState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use folio_common::{Block, Content, Portfolio, Position, Style, Template};
use folio_editor::PaletteEntry;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

type SharedState = Arc<WorkspaceState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/portfolios", get(list_portfolios))
        .route(
            "/api/portfolios/from-template/:template_id",
            post(create_from_template),
        )
        .route("/api/portfolios/:id", delete(delete_portfolio))
        .route("/api/portfolios/:id/publish", post(publish))
        .route("/api/portfolios/:id/preview", get(preview))
        .route("/api/stats", get(stats))
        .route("/api/templates", get(templates))
        .route("/api/blocks", get(palette))
        .route("/api/builder/:id", get(builder_state))
        .route("/api/builder/:id/open", post(open_builder))
        .route("/api/builder/:id/blocks", post(add_block))
        .route("/api/builder/:id/drop", post(drop_block))
        .route(
            "/api/builder/:id/blocks/:block_id",
            put(update_block).delete(delete_block),
        )
        .route(
            "/api/builder/:id/blocks/:block_id/content",
            patch(set_content_field),
        )
        .route("/api/builder/:id/select", post(select_block))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve the API until the process exits
pub async fn serve(addr: SocketAddr, state: SharedState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Folio API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}

pub struct ApiError(BuilderError);

impl From<BuilderError> for ApiError {
    fn from(error: BuilderError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            e if e.is_not_found() => StatusCode::NOT_FOUND,
            BuilderError::Mutation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MutationResponse {
    block: Option<Block>,
    changed: bool,
    state: BuilderState,
}

#[derive(Debug, Deserialize)]
struct AddBlockRequest {
    #[serde(rename = "type")]
    kind: String,
}

/// Editable parts of a block. The path names the block; `id` and `type`
/// in the body are ignored and omitted fields keep their current value.
#[derive(Debug, Deserialize)]
struct UpdateBlockRequest {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    style: Option<Style>,
    #[serde(default)]
    position: Option<Position>,
}

#[derive(Debug, Deserialize)]
struct DropRequest {
    payload: String,
}

#[derive(Debug, Deserialize)]
struct ContentFieldRequest {
    field: String,
    value: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectRequest {
    #[serde(default)]
    block_id: Option<String>,
}

// ----------------------------------------------------------------------------
// Portfolios, templates, palette
// ----------------------------------------------------------------------------

async fn list_portfolios(State(state): State<SharedState>) -> ApiResult<Vec<Portfolio>> {
    Ok(Json(state.builder().list_portfolios().await?))
}

async fn create_from_template(
    State(state): State<SharedState>,
    Path(template_id): Path<u64>,
) -> Result<(StatusCode, Json<Portfolio>), ApiError> {
    let portfolio = state.builder().create_from_template(template_id).await?;
    Ok((StatusCode::CREATED, Json(portfolio)))
}

async fn delete_portfolio(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state.delete_portfolio(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn publish(State(state): State<SharedState>, Path(id): Path<u64>) -> ApiResult<Portfolio> {
    Ok(Json(state.publish(id).await?))
}

async fn preview(State(state): State<SharedState>, Path(id): Path<u64>) -> ApiResult<Preview> {
    Ok(Json(state.builder().preview(id).await?))
}

async fn stats(State(state): State<SharedState>) -> ApiResult<DashboardStats> {
    Ok(Json(state.builder().dashboard_stats().await?))
}

async fn templates(
    State(state): State<SharedState>,
    Query(filter): Query<TemplateFilter>,
) -> ApiResult<Vec<Template>> {
    Ok(Json(state.builder().templates(&filter).await?))
}

async fn palette(State(state): State<SharedState>) -> Json<Vec<PaletteEntry>> {
    Json(state.builder().palette())
}

// ----------------------------------------------------------------------------
// Builder sessions
// ----------------------------------------------------------------------------

async fn open_builder(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> ApiResult<BuilderState> {
    Ok(Json(state.open(id).await?))
}

async fn builder_state(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> ApiResult<BuilderState> {
    Ok(Json(state.snapshot(id).await?))
}

async fn add_block(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(request): Json<AddBlockRequest>,
) -> Result<(StatusCode, Json<MutationResponse>), ApiError> {
    let (added, state) = state
        .with_session(id, |session| session.add_block(request.kind.as_str()))
        .await?;
    let block = added.map_err(BuilderError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            block: Some(block),
            changed: true,
            state,
        }),
    ))
}

async fn drop_block(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(request): Json<DropRequest>,
) -> ApiResult<MutationResponse> {
    let (block, state) = state
        .with_session(id, |session| {
            session.drag_over();
            session.drop_payload(&request.payload)
        })
        .await?;

    Ok(Json(MutationResponse {
        changed: block.is_some(),
        block,
        state,
    }))
}

async fn update_block(
    State(state): State<SharedState>,
    Path((id, block_id)): Path<(u64, String)>,
    Json(request): Json<UpdateBlockRequest>,
) -> ApiResult<MutationResponse> {
    let (block, state) = state
        .with_session(id, |session| {
            let mut block = session.document().find_block(&block_id)?.clone();
            if let Some(content) = request.content {
                block.content = content;
            }
            if let Some(style) = request.style {
                block.style = style;
            }
            if let Some(position) = request.position {
                block.position = position;
            }
            session
                .update_block(block)
                .then(|| session.document().find_block(&block_id).cloned())
                .flatten()
        })
        .await?;

    Ok(Json(MutationResponse {
        changed: block.is_some(),
        block,
        state,
    }))
}

async fn set_content_field(
    State(state): State<SharedState>,
    Path((id, block_id)): Path<(u64, String)>,
    Json(request): Json<ContentFieldRequest>,
) -> ApiResult<MutationResponse> {
    let (block, state) = state
        .with_session(id, |session| {
            session
                .set_content_field(&block_id, &request.field, request.value)
                .then(|| session.document().find_block(&block_id).cloned())
                .flatten()
        })
        .await?;

    Ok(Json(MutationResponse {
        changed: block.is_some(),
        block,
        state,
    }))
}

async fn delete_block(
    State(state): State<SharedState>,
    Path((id, block_id)): Path<(u64, String)>,
) -> ApiResult<MutationResponse> {
    let (changed, state) = state
        .with_session(id, |session| session.delete_block(&block_id))
        .await?;

    Ok(Json(MutationResponse {
        block: None,
        changed,
        state,
    }))
}

async fn select_block(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(request): Json<SelectRequest>,
) -> ApiResult<BuilderState> {
    let (_, state) = state
        .with_session(id, |session| session.select_block(request.block_id.as_deref()))
        .await?;
    Ok(Json(state))
}
