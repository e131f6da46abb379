//! TGREET - Terminal Greeting Client Library
//!
//! A terminal client for a small greeting HTTP API, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
