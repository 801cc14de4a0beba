#![allow(dead_code)]

use origin_cors_rs::Headers;
use origin_cors_rs::constants::header;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn header_names(headers: &Headers) -> Vec<&str> {
    headers.keys().map(String::as_str).collect()
}

pub fn default_headers_for(origin: &str) -> Headers {
    Headers::from([
        (header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(), origin.to_string()),
        (header::ACCESS_CONTROL_ALLOW_CREDENTIALS.to_string(), "true".to_string()),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS.to_string(),
            "Content-Type, X-Requested-With".to_string(),
        ),
        (header::ACCESS_CONTROL_ALLOW_METHODS.to_string(), "OPTIONS".to_string()),
        (header::ACCESS_CONTROL_EXPOSE_HEADERS.to_string(), String::new()),
    ])
}
