pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ORIGIN: &str = "Origin";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod defaults {
    use super::method;

    pub const ALLOW_CREDENTIALS: bool = true;
    pub const ALLOW_HEADERS: &[&str] = &["Content-Type", "X-Requested-With"];
    pub const ALLOW_METHODS: &[&str] = &[method::OPTIONS];

    /// Allow-list entry that admits every non-empty origin.
    pub const WILDCARD_ALL: &str = "*";

    /// Separator used when joining list-valued headers.
    pub const LIST_SEPARATOR: &str = ", ";
}
