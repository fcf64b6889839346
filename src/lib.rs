//! # Introduction
//!
//! twosum-tty simulates the hash-map Two Sum scan and records a snapshot of
//! the full algorithm state at every micro-operation. The snapshot sequence is
//! then navigated forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), like stepping through a debugger.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Validation → Step Generator → Steps → Player → TUI
//! ```
//!
//! 1. [`input`]: input data, presets, parsing, validation and random inputs.
//! 2. [`steps`]: the snapshot model and [`steps::generate_steps`], a pure,
//!    deterministic function from `(nums, target)` to the step sequence.
//! 3. [`listing`]: the canonical reference listing, its line numbers and the
//!    per-language display listings with their line remapping.
//! 4. [`playback`]: [`playback::Player`], a clamped cursor into the steps.
//! 5. [`prefs`]: persisted playback rate and display language.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use twosum_tty::steps::{generate_steps, result_from_steps};
//!
//! let steps = generate_steps(&[2, 7, 11, 15], 9);
//! assert_eq!(result_from_steps(&steps), Some((0, 1)));
//! ```

pub mod input;
pub mod listing;
pub mod playback;
pub mod prefs;
pub mod steps;
pub mod ui;
