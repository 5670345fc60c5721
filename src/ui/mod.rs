//! User interface rendering layer with component-based architecture.
//!
//! Turns application state into ANSI-styled text for the terminal front-end.
//! The library core does not depend on this module beyond the [`Theme`]
//! stored in the state.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → LibraryViewModel → render → ANSI String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Width-aware text layout, highlighting, icon and status lookups
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_action, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    compute_viewmodel, BatchBar, DisplayItem, EmptyState, FilterPanelInfo, FooterInfo, GroupSection,
    HeaderInfo, LibraryViewModel, SearchBarInfo,
};
