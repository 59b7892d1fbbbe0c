#![deny(missing_docs)]

//! # bsv-pick
//!
//! Pulls individual fields out of a raw transaction as hex, for use in
//! shell pipelines, and builds the structured view the pretty printer
//! renders.

pub mod breakdown;
pub mod error;
pub mod extract;
pub mod render;
pub mod selector;

pub use breakdown::{InputView, LockTime, OutputView, TxBreakdown};
pub use error::PickError;
pub use extract::{extract, extract_field, extract_hex};
pub use render::{Palette, Renderer};
pub use selector::FieldSelector;
