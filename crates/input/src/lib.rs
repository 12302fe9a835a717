//! Desktop input mapped to camera actions.
//!
//! Window events update an [`InputState`]; once per frame the state is drained
//! into [`Action`]s which are applied to the camera in order.
//!
//! # Invariants
//! - Pointer motion only turns the camera while the pointer is captured.
//! - Look actions carry whole pixels; sub-pixel motion carries over to the next frame.

pub mod action;
pub mod state;

pub use action::{Action, dispatch};
pub use state::{InputState, Key};

pub fn crate_info() -> &'static str {
    "quadview-input v0.1.0"
}
