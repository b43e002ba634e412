//! HTTP-слой: страница, статика и API перевода

pub mod api_server;
pub mod handlers;

pub use api_server::{router, start_server};
