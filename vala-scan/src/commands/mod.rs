//! Command implementations for the vala-scan CLI.

pub mod scan;

pub use scan::{run_scan, ScanArgs};
