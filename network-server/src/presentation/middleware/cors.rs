use anyhow::{Result, anyhow};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

use crate::infrastructure::settings::Settings;

pub(crate) fn apply_cors(router: Router, settings: &Settings) -> Result<Router> {
    let layer = if settings.cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = settings
            .cors_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|err| anyhow!("invalid CORS origin {origin:?}: {err}"))
            })
            .collect::<Result<Vec<_>>>()?;

        CorsLayer::new().allow_origin(origins)
    };

    // The API only exposes GET, POST and DELETE routes.
    let layer = layer
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    Ok(router.layer(layer))
}
