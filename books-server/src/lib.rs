//! Books Server Library
//!
//! REST API over the book service. The `books` binary starts it through
//! [`serve`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use server::serve;
