//! # strassen-cli
//!
//! Output formatting, result presentation and shell completion for the
//! `strassen` binary.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CliPresenter;
