pub mod chunked;
pub mod status;

pub use chunked::chunked_handler;
pub use status::{
    forbidden_handler, found_handler, index_handler, too_many_requests_handler,
    unauthorized_handler,
};
