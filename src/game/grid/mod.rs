//! Arena grid module.
//!
//! This module organizes the cell matrix and round generation logic.

pub mod grid;

pub use grid::*;
