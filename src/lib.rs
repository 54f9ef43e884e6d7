pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;

pub use pipeline::{build_reports, run, RunSummary};
