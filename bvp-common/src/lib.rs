//! # BVP Common Library
//!
//! Shared code for the Building Valuation Platform services including:
//! - Database connection and building models
//! - Configuration loading
//! - Common error types

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
