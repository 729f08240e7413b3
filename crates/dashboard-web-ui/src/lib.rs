//! Dashboard Web UI
//!
//! Serves dashboard pages built from tabular datasets over HTTP.

pub mod config;
pub mod handlers;
pub mod pages;
pub mod server;
pub mod templates;

pub use config::DashboardConfig;
pub use pages::{Page, PageRegistry};
pub use server::{router, WebUiServer};
