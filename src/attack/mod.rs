//! Length-extension toolkit
//!
//! Continues hashing from a published digest so that a valid digest for
//! `original ‖ padding ‖ suffix` can be produced without knowing `original`.

mod extend;
mod forger;

pub use extend::{extend, extend_from_bytes, forged_message, glue_padding, resume};
pub use forger::{ForgeConfig, Forger, Forgery};
