//! Service layer for the mirror application.
//!
//! Contains the orchestration logic that turns a candidate URL into a
//! stored, servable page record (`MirrorService`).

mod mirror;

pub use mirror::{MirrorOutcome, MirrorService};
