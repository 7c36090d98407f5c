//! Open addressing hash table with quadratic probing and lazy deletion.
//!
//! Capacities are always prime and the table grows once more than half of
//! its slots have been written, which keeps the probe sequence
//! `h, h+1, h+4, h+9, ...` guaranteed to reach a free slot.

#![deny(clippy::all)]
#![deny(unused_must_use)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
pub mod prime;
mod store;
mod table;

pub use error::Error;
pub use table::{Iter, ProbeTable, DEFAULT_TABLE_SIZE};
