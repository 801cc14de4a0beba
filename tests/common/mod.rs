pub mod builders;
pub mod headers;
