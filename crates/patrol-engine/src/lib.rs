//! Patrol simulation engine.
//!
//! Layers, each built on the one before:
//!
//! 1. [`step`](mod@step): advance the guard one tick, turning at obstacles and
//!    marking trails on the grid.
//! 2. [`detector`]: drive `step` while recording guard states;
//!    a repeated state is a loop, leaving the grid is an exit.
//! 3. [`traversal`]: the unobstructed patrol and its visited-cell count.
//! 4. [`search`]: try one added obstacle per candidate cell and count
//!    the placements that trap the guard in a loop. Trials run on
//!    independent grid copies and may be spread over worker threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod detector;
pub mod metrics;
pub mod search;
pub mod step;
pub mod traversal;
pub(crate) mod worker;

pub use config::{CandidatePolicy, ConfigError, SearchConfig};
pub use detector::{detect_loop, detect_loop_bounded, find_loop, LoopDetector, LoopOutcome};
pub use metrics::SearchMetrics;
pub use search::{count_loop_obstructions, ObstructionSearch, SearchError, SearchReport};
pub use step::step;
pub use traversal::{traverse, visited_cell_count, Traversal};
