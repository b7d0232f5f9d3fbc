//! Command implementations.
//!
//! - [`check`] - lint and report
//! - [`fix`] - lint and rewrite in place
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and runs against the current directory, plus `execute_in`
//! for an explicit working directory.

pub mod check;
pub mod files;
pub mod fix;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use fix::execute as fix_execute;
