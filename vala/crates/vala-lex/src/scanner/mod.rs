//! Scanner module.
//!
//! The scanner is split by sub-scanner:
//! - `core` - Scanner struct, options and dispatch
//! - `whitespace` - Whitespace runs
//! - `identifier` - Identifiers and keywords
//! - `symbol` - Greedy-then-shrink special-symbol runs
//! - `number` - Integer and real literals

mod core;
mod identifier;
mod number;
mod symbol;
mod whitespace;

pub use self::core::{ScanOptions, Scanner};
