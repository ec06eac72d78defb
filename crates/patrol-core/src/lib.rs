//! Core types for the Patrol guard-walk simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: grid positions,
//! cardinal directions, guard state, cell kinds, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod position;

pub use cell::Cell;
pub use direction::{Axis, Direction};
pub use error::{GridError, PatrolError};
pub use position::{GuardState, Position};
