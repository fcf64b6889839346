//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, input editing
//! - **[`panes`]**: stateless render functions for each visible pane (source, array,
//!   hash map, info, status bar, input prompt)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a validated
//! [`InputData`] and call [`App::run`] to start the event loop.
//!
//! [`InputData`]: crate::input::InputData
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
