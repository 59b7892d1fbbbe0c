//! # bsv-tools
//!
//! Plumbing shared by the BSV command-line tools (`carve`, `pick`,
//! `broadcast`, `txstatus`, `getraw`, `keygen`, `wifinfo`, `prettytx`):
//! configuration, input resolution, logging, status reporting and the
//! mapping from errors to exit codes.

pub mod config;
pub mod exit;
pub mod input;
pub mod keys;
pub mod logging;
pub mod watch;

pub use config::{Config, ConfigError};
pub use input::InputError;
