//! bookfolio: a portfolio read as a book, one page at a time.

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod motion;
pub mod navigator;
pub mod report;
pub mod timer;
pub mod tui;
pub mod types;
