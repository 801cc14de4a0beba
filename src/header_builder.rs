use crate::config::CorsConfig;
use crate::constants::{defaults, header};
use crate::headers::HeaderCollection;

const HEADER_COUNT: usize = 5;

pub(crate) struct HeaderBuilder<'a> {
    config: &'a CorsConfig,
    origin: &'a str,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(config: &'a CorsConfig, origin: &'a str) -> Self {
        Self { config, origin }
    }

    /// Full header set for an allowed origin, in emission order.
    pub(crate) fn build(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(HEADER_COUNT);
        headers.extend(self.build_origin_header());
        headers.extend(self.build_credentials_header());
        headers.extend(self.build_allowed_headers());
        headers.extend(self.build_methods_header());
        headers.extend(self.build_exposed_headers());
        headers
    }

    /// Echoes the request origin, never `*`.
    pub(crate) fn build_origin_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, self.origin);
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let value = if self.config.allow_credentials() {
            "true"
        } else {
            "false"
        };
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, value);
        headers
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.config.allow_headers().join(defaults::LIST_SEPARATOR),
        );
        headers
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.config.allow_methods().join(defaults::LIST_SEPARATOR),
        );
        headers
    }

    /// Always emitted; the value is empty when nothing is exposed.
    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.config.expose_headers().join(defaults::LIST_SEPARATOR),
        );
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
