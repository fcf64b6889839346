//! TUI pane rendering modules
//!
//! Every pane reads the current [`crate::steps::Step`] and draws it; none of
//! them mutate it. Scroll offsets are owned by [`crate::ui::App`] and passed in.
//!
//! # Pane Modules
//!
//! - [`source`]: Reference listing with syntax highlighting, current line and variable hints
//! - [`array`]: Array cells with highlights and pointers
//! - [`hashmap`]: Hash-map entries with new/looked-up emphasis
//! - [`info`]: Step caption, calculation, arrows and final answer
//! - [`status`]: Status bar with keybindings and playback state
//! - [`prompt`]: Input editor popup

pub mod array;
pub mod hashmap;
pub mod info;
pub mod prompt;
pub mod source;
pub mod status;

// Re-export render functions for convenience
pub use array::render_array_pane;
pub use hashmap::{render_hashmap_pane, HashMapScrollState};
pub use info::render_info_pane;
pub use prompt::render_input_prompt;
pub use source::{render_source_pane, SourceScrollState};
pub use status::render_status_bar;
