//! HTTP surface: application state, router and handlers.

use crate::config::Config;
use crate::i18n::{
    CatalogueValidator, DirectorySource, I18nError, I18nMetrics, LocaleRegistry, MessageSource,
    MessageStore, Translator,
};
use crate::routing::{route_locale, LocalePolicy, LocaleRouting, RequestContext};
use crate::seo::{render_sitemap, robots_txt, sitemap_entries};
use crate::site::{render_not_found, render_page, CategoryFilter, Page, PageRequest};
use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Shared, read-only state built once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Translator,
    pub policy: Arc<LocalePolicy>,
    pub metrics: Arc<I18nMetrics>,
}

impl AppState {
    /// Build state with catalogues read from `config.locales_dir`.
    pub fn load(config: Config) -> Result<Self, I18nError> {
        let source = DirectorySource::new(config.locales_dir.clone());
        Self::with_source(config, &source)
    }

    /// Build state with catalogues from `source`.
    ///
    /// # Errors
    /// Any registry configuration error, or the first locale whose
    /// catalogue cannot be loaded. Either one should stop the process.
    pub fn with_source(config: Config, source: &dyn MessageSource) -> Result<Self, I18nError> {
        let registry = Arc::new(LocaleRegistry::new(
            config.supported_locales.as_slice(),
            &config.default_locale,
        )?);
        let store = Arc::new(MessageStore::load(&registry, source)?);
        check_catalogues(&registry, &store);

        let metrics = Arc::new(I18nMetrics::new());
        let translator = Translator::new(registry.clone(), store, metrics.clone());
        let policy = Arc::new(LocalePolicy::new(registry, config.redirect_status));

        Ok(Self {
            config: Arc::new(config),
            translator,
            policy,
            metrics,
        })
    }
}

/// Compare every non-default catalogue against the default one and log
/// what differs. Never fails.
fn check_catalogues(registry: &LocaleRegistry, store: &MessageStore) {
    let default = registry.default_locale();
    let Some(reference) = store.tree(default) else {
        return;
    };

    for &locale in registry.locales().iter().filter(|&&l| l != default) {
        let Some(candidate) = store.tree(locale) else {
            continue;
        };
        let report = CatalogueValidator::validate(reference, candidate);
        for problem in &report.errors {
            warn!("Catalogue {}: {}", locale, problem);
        }
        for problem in &report.warnings {
            warn!("Catalogue {}: {}", locale, problem);
        }
        if report.is_clean() {
            info!("Catalogue {} matches {}", locale, default);
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let routing = LocaleRouting {
        policy: state.policy.clone(),
        metrics: state.metrics.clone(),
    };

    Router::new()
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
        .route("/_health", get(health))
        .fallback(page)
        .layer(middleware::from_fn_with_state(routing, route_locale))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on `listener` until Ctrl+C.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}

// ==================== Handlers ====================

#[derive(Debug, Deserialize)]
struct PageQuery {
    category: Option<String>,
}

/// Every localized page, plus the 404 for anything no route matched.
async fn page(
    State(state): State<AppState>,
    ctx: Option<Extension<RequestContext>>,
    query: Option<Query<PageQuery>>,
) -> Response {
    // Excluded paths reach here without a locale
    let Some(Extension(ctx)) = ctx else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let category = query.as_ref().and_then(|Query(q)| q.category.as_deref());
    let request = PageRequest {
        translator: &state.translator,
        policy: state.config.missing_key_fallback,
        base_url: &state.config.base_url,
        locale: ctx.locale,
        filter: CategoryFilter::from_query(category),
        year: Utc::now().year(),
    };

    let (status, rendered) = match Page::from_remainder(&ctx.remainder) {
        Some(page) => (StatusCode::OK, render_page(&request, page)),
        None => (StatusCode::NOT_FOUND, render_not_found(&request)),
    };

    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render {}: {}", ctx.localized_path(), e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn sitemap(State(state): State<AppState>) -> Response {
    let entries = sitemap_entries(
        &state.config.base_url,
        state.policy.registry(),
        Utc::now().date_naive(),
    );
    match render_sitemap(&entries) {
        Ok(xml) => ([(CONTENT_TYPE, "application/xml")], xml).into_response(),
        Err(e) => {
            error!("Failed to render sitemap: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&state.config.base_url),
    )
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let registry = state.policy.registry();
    Json(json!({
        "status": "ok",
        "default_locale": registry.default_locale(),
        "locales": registry.locales(),
        "messages": state.translator.store().counts(),
        "metrics": state.metrics.report(),
    }))
}
