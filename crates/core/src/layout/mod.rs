//! Overlap layout for the daily grid.
//!
//! Partitions one day's events into overlap clusters (connected components
//! of the overlap graph, not pairwise neighbours) and assigns each event a
//! column slot so overlapping events render side by side while
//! non-overlapping events keep the full width.

mod builder;

pub use builder::LayoutBuilder;
