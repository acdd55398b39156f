//! Runtime detection for the tools a generated project needs

pub mod check;

pub use check::{check_node, check_npm, detected_runtimes, missing_runtimes, RuntimeInfo};
