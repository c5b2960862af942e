// Library exports for testing
pub mod app;
pub mod behavior;
pub mod cli;
pub mod clock;
pub mod constants;
pub mod dom;
pub mod error;
pub mod persistence;
pub mod types;
pub mod ui;
