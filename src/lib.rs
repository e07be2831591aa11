//! hexview
//!
//! Windowed hex viewer: only the bytes on screen are ever read from the
//! data source, so inputs of any size open instantly.
//!
//! Follows a Pure Core / Impure Shell split: `model`, `view_state` and
//! `state` are plain integer geometry and state machines; `view` owns the
//! terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
