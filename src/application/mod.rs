//! Application layer managing state and UI workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing application state, user input, and request settlement.

pub mod state;

pub use state::*;
