use axum::{
    extract::Form,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use segment_core::classify;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

mod api;
mod config;
mod diagram;
mod form;
mod pages;

use config::Config;
use form::SegmentForm;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let app = router();

    info!("listening on {}", config.listen);
    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/calculate", post(calculate))
        .route("/api/classify", post(api::classify_handler))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")))
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<String> {
    Html(pages::form_page(&SegmentForm::default(), None))
}

async fn health() -> String {
    format!("ok segment-core {}", segment_core::version())
}

async fn calculate(Form(form): Form<SegmentForm>) -> Response {
    let (first, second) = match form.parse() {
        Ok(segments) => segments,
        Err(e) => {
            warn!("Rejected form input: {}", e);
            let page = pages::form_page(&form, Some(&e));
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response();
        }
    };

    let relationship = classify(&first, &second);
    debug!(kind = relationship.kind(), "Classified {:?} / {:?}", first.coords(), second.coords());

    let svg = diagram::render(&first, &second, &relationship);
    Html(pages::result_page(&form, &relationship, &svg)).into_response()
}
