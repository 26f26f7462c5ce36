//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`outputs`]: Output list with connection state and current resolution
//! - [`details`]: Geometry of the selected output and its property table
//! - [`modes`]: Mode list of the selected output with refresh rates
//! - [`status`]: Status bar with keybindings, counts and the fingerprint
//! - `layout`: Shared block styling and scroll clamping
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area, the data to show, whether it has focus and, for scrollable
//! panes, a mutable scroll offset that the render clamps to the content.

mod layout;

pub mod details;
pub mod modes;
pub mod outputs;
pub mod status;

// Re-export render functions for convenience
pub use details::render_details_pane;
pub use modes::render_modes_pane;
pub use outputs::render_outputs_pane;
pub use status::{render_status_bar, StatusRenderData};
