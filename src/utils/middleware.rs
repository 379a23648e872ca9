use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Cross-origin sources the API answers to.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        AllowedOrigins::List(vec![HeaderValue::from_static(DEFAULT_ORIGIN)])
    }
}

impl AllowedOrigins {
    /// Parses a comma separated `ALLOWED_ORIGINS` value.
    ///
    /// A `*` entry opens the API to every origin. Entries that are not valid
    /// header values are dropped; an empty result falls back to the default.
    pub fn parse(raw: &str) -> Self {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .collect();

        if entries.contains(&"*") {
            return AllowedOrigins::Any;
        }

        let origins: Vec<HeaderValue> = entries
            .into_iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("ignoring invalid CORS origin {:?}", o);
                    None
                }
            })
            .collect();

        if origins.is_empty() {
            AllowedOrigins::default()
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let layer = match origins {
        AllowedOrigins::Any => {
            tracing::warn!("CORS allows any origin, do not use this in production");
            CorsLayer::new().allow_origin(Any)
        }
        AllowedOrigins::List(list) => CorsLayer::new().allow_origin(list.clone()),
    };
    layer.allow_methods(Any).allow_headers(Any)
}
