//! HireTrack TUI - a terminal client for the hiring pipeline backend
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod client;
pub mod config;
pub mod models;
pub mod search;
pub mod ui;
