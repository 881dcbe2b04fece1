//! Library components of the `druglink` command-line tool.

pub mod logging;
pub mod pipeline;
