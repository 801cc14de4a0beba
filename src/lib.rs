pub mod constants;
mod config;
mod context;
mod cors;
mod header_builder;
mod headers;
mod options;
mod origin;
mod preflight;

pub use config::CorsConfig;
pub use context::{RequestMetadata, request_origin};
pub use cors::Cors;
pub use headers::Headers;
pub use options::{ConfigError, CorsOptions};
pub use origin::{OriginList, OriginPattern, PatternError};
pub use preflight::{PreflightAction, preflight_action};
