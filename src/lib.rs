pub mod config;
pub mod divergence;
pub mod error;
pub mod indicator;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod scanner;
