use crate::constants::defaults;
use crate::options::CorsOptions;
use crate::origin::OriginList;

/// Effective configuration: defaults merged with caller overrides, origin
/// allow-list compiled. Immutable once built.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    allow_credentials: bool,
    allow_headers: Vec<String>,
    allow_methods: Vec<String>,
    allow_origins: OriginList,
    expose_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::from_options(&CorsOptions::default())
    }
}

impl CorsConfig {
    pub fn from_options(options: &CorsOptions) -> Self {
        Self {
            allow_credentials: options
                .allow_credentials
                .unwrap_or(defaults::ALLOW_CREDENTIALS),
            allow_headers: merge(defaults::ALLOW_HEADERS, &options.allow_headers),
            allow_methods: merge(defaults::ALLOW_METHODS, &options.allow_methods),
            allow_origins: OriginList::new(&options.allow_origins),
            expose_headers: options.expose_headers.clone(),
        }
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    pub fn allow_headers(&self) -> &[String] {
        &self.allow_headers
    }

    pub fn allow_methods(&self) -> &[String] {
        &self.allow_methods
    }

    pub fn allow_origins(&self) -> &OriginList {
        &self.allow_origins
    }

    pub fn expose_headers(&self) -> &[String] {
        &self.expose_headers
    }

    pub fn is_origin_match(&self, origin: &str) -> bool {
        self.allow_origins.matches(origin)
    }
}

fn merge(base: &[&str], extra: &[String]) -> Vec<String> {
    base.iter()
        .map(|value| (*value).to_owned())
        .chain(extra.iter().cloned())
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
