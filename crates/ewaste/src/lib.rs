//! `ewaste` - Track electronic devices and know when to replace them
//!
//! This library provides an in-memory inventory of devices, each with a
//! replacement date derived from its purchase date and expected lifetime, and
//! persists the inventory to a JSON file.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod inventory;
pub mod item;
pub mod logging;

pub use config::Config;
pub use error::{Error, Result};
pub use inventory::{Inventory, LoadOutcome};
pub use item::{Item, ItemRecord};
pub use logging::init_logging;
