// Route path constants - single source of truth for all fixture paths

pub const INDEX: &str = "/";
pub const FOUND: &str = "/302.html";
pub const UNAUTHORIZED: &str = "/401.html";
pub const FORBIDDEN: &str = "/403.html";
pub const TOO_MANY_REQUESTS: &str = "/429.html";
pub const CHUNKED: &str = "/chunked.html";
