pub mod api_doc;
pub mod app;
pub mod config;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod telemetry;
