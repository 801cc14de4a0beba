#![allow(dead_code)]

use origin_cors_rs::constants::header;
use origin_cors_rs::{Cors, CorsConfig, CorsOptions};
use std::collections::HashMap;

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allow_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allow_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn allow_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allow_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.expose_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.allow_credentials = Some(enabled);
        self
    }

    pub fn options(self) -> CorsOptions {
        self.options
    }

    pub fn config(self) -> CorsConfig {
        CorsConfig::from_options(&self.options)
    }
}

#[derive(Default)]
pub struct RequestBuilder {
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.headers.insert(header::ORIGIN.to_string(), origin.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn evaluate(self, cors: CorsBuilder) -> Cors {
        Cors::new(&self.headers, &cors.options())
    }

    pub fn evaluate_with(self, config: &CorsConfig) -> Cors {
        Cors::with_config(&self.headers, config.clone())
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}
