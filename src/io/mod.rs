//! I/O helpers.
//!
//! - `export`: write run reports as JSON

pub mod export;
