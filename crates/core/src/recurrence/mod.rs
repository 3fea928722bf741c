//! Recurrence expansion.
//!
//! Turns a weekly recurrence rule into concrete, dated event occurrences.
//! Expansion is decoupled from committing so a caller can preview the batch
//! before writing anything to the store.

mod expander;

pub use expander::expand;
