//! Interactive terminal reader.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Action, Transition)
//! - `update`: pure transitions
//! - `view`: pure rendering, with `compose` posing the page for a turn
//! - `run`: the effects (terminal, threads, event loop)

pub mod compose;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
