//! Data model for the entry-requirements interchange document.
//!
//! This module provides:
//! - `Tristate`: a boolean that may also be unknown
//! - `Color`: the five display categories
//! - `Facts`: the four per-country facts (`extracted` on the wire)
//! - `EntryRecord` / `EntryDataset`: the document itself
//!
//! Keys the model does not know about are carried through verbatim.

mod color;
mod facts;
mod record;
mod tristate;

pub use color::Color;
pub use facts::Facts;
pub use record::{EntryDataset, EntryRecord};
pub use tristate::Tristate;
