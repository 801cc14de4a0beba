use crate::config::CorsConfig;
use crate::context::{RequestMetadata, request_origin};
use crate::header_builder::HeaderBuilder;
use crate::headers::{HeaderCollection, Headers};
use crate::options::CorsOptions;

/// Per-request CORS evaluator.
///
/// The origin decision is made once during construction and never changes.
/// Build one per request and drop it after reading the headers.
#[derive(Clone, Debug)]
pub struct Cors {
    config: CorsConfig,
    request_origin: String,
    enabled: bool,
}

impl Cors {
    /// Merges `options` over the defaults and evaluates the request origin.
    pub fn new<M>(metadata: &M, options: &CorsOptions) -> Self
    where
        M: RequestMetadata + ?Sized,
    {
        Self::with_config(metadata, CorsConfig::from_options(options))
    }

    /// Evaluates the request origin against an already merged configuration.
    pub fn with_config<M>(metadata: &M, config: CorsConfig) -> Self
    where
        M: RequestMetadata + ?Sized,
    {
        let request_origin = request_origin(metadata).to_owned();
        let enabled = config.is_origin_match(&request_origin);
        tracing::debug!(origin = %request_origin, enabled, "evaluated CORS origin");

        Self {
            config,
            request_origin,
            enabled,
        }
    }

    /// Whether the request origin is allowed.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Headers to write on the response. Empty when the origin is not allowed.
    pub fn headers(&self) -> Headers {
        if !self.enabled {
            return HeaderCollection::new().into_headers();
        }

        HeaderBuilder::new(&self.config, &self.request_origin)
            .build()
            .into_headers()
    }

    pub fn is_origin_match(&self) -> bool {
        self.config.is_origin_match(&self.request_origin)
    }

    pub fn request_origin(&self) -> &str {
        &self.request_origin
    }

    pub fn config(&self) -> &CorsConfig {
        &self.config
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
