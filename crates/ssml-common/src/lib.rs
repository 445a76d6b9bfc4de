//! Common utilities for the SSML toolkit.
//!
//! This crate provides shared infrastructure used by the toolkit's front ends:
//! - **Warning System** - colored, de-duplicated terminal output for
//!   non-fatal parse issues

pub mod warning;
