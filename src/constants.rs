pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const ORIGIN: &str = "Origin";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const OPTIONS: &str = "OPTIONS";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod policy {
    /// Origins are matched exactly, case-sensitively.
    pub const ALLOWED_ORIGINS: [&str; 3] = [
        "http://localhost:3000",
        "https://localhost:3000",
        "https://ride-sharing.tk",
    ];
    /// Methods and headers are matched case-insensitively; stored lower-case.
    pub const ALLOWED_METHODS: [&str; 4] = ["get", "post", "delete", "put"];
    pub const ALLOWED_HEADERS: [&str; 3] = ["content-type", "authorization", "x-api-key"];
    pub const PREFLIGHT_MAX_AGE_SECS: u32 = 600;
    pub const LIST_PAGE_SIZE: usize = 100;
    /// Length of the `Bearer` scheme prefix on the Authorization value.
    pub const BEARER_PREFIX_LEN: usize = 6;
}
