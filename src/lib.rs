//! # commit-forge
//!
//! An interactive CLI that fills a contribution graph with backdated commits.
//!
//! This crate provides functionality to:
//! - Check that `git` and the GitHub CLI (`gh`) are installed
//! - Create a new private repository or pick one of yours
//! - Clone it, reusing or replacing an existing local directory
//! - Write one commit per day over an inclusive date range, dated at noon
//! - Push the result to `origin main`
//!
//! ## Usage
//!
//! ```bash
//! commit-forge
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface and main entry point
//! - [`session`] - Menu loop driving one round after another
//! - [`selector`] - Repository creation and selection menus
//! - [`materialize`] - Clone URL resolution and local clone handling
//! - [`forge`] - Date range parsing and the per-day commit loop
//! - [`git`] / [`gh`] - Wrappers around the external tools
//! - [`deps`] - External tool presence checks
//! - [`prompt`] - User input abstractions
//! - [`banner`] - Decorative welcome banner
//! - [`error`] - Shared error type

pub mod banner;
pub mod cli;
mod command;
pub mod deps;
pub mod error;
pub mod forge;
pub mod gh;
pub mod git;
pub mod materialize;
pub mod prompt;
pub mod selector;
pub mod session;

#[cfg(test)]
mod test_support;
