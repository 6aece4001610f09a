//! Region builders and the per-pass builder stack.
//!
//! A [`FragmentBuilder`] grows one node tree from the events of one open
//! model region. The [`BuilderStack`] keeps the builders for the currently
//! nested open regions; the stack top is the single builder receiving events
//! at any instant.

mod fragment;
mod stack;

pub use fragment::{FragmentBuilder, Placement};
pub use stack::BuilderStack;
