//! declutter - Mental Clutter Reduction checklist
//!
//! This library provides the core functionality for the declutter CLI and
//! TUI: a persisted checklist of self-help tasks grouped into topical
//! buckets, with toggle/add/delete/reset operations and a one-time
//! sign-in gate in front of the task surface.
//!
//! # Core Concepts
//!
//! - **Persisted cell**: a single value mirrored to a file in the data
//!   directory, tolerant of corrupt or absent data, with explicit
//!   observer registration
//! - **Checklist**: an ordered task collection mutated copy-on-write and
//!   re-grouped for display
//! - **Access gate**: a webhook sign-in that flips a persisted flag
//!
//! # Module Organization
//!
//! - `cli`: command-line interface using clap
//! - `checklist`: checklist store binding the task operations to storage
//! - `config`: configuration loading from `declutter.toml`
//! - `error`: error types and result aliases
//! - `gate`: sign-in submission and the persisted sign-in flag
//! - `output`: shared human/JSON output formatting
//! - `seed`: the built-in default task seed
//! - `share`: completion summary sharing
//! - `storage`: data directory layout and atomic file I/O
//! - `store`: the persisted state cell
//! - `task`: task records and pure collection transformations
//! - `ui`: full-screen checklist TUI

pub mod checklist;
pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod output;
pub mod seed;
pub mod share;
pub mod storage;
pub mod store;
pub mod task;
pub mod ui;

pub use error::{Error, Result};
