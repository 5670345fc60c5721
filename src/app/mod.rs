//! Application layer coordinating state, events, and actions.
//!
//! This module sits between a front-end (the terminal binary, or any other
//! renderer) and the library core. It implements the event-driven flow that
//! powers the document library UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Event → handle_event → AppState transition → Actions → Front-end
//!                                          ↓
//!                          visible_documents / grouped_view (derived on read)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`command`]: Text command parser used by the terminal front-end
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Presentation mode
//! - [`state`]: Central application state container
//!
//! # Example
//!
//! ```rust
//! use docshelf::app::{handle_event, parse_command, AppState};
//! use docshelf::ui::theme::Theme;
//!
//! let mut state = AppState::new(docshelf::library::seed::builtin_documents()?, Theme::default());
//! let event = parse_command("type pdf")?;
//! let (needs_render, _actions) = handle_event(&mut state, &event)?;
//! assert!(needs_render);
//! assert_eq!(state.visible_documents().len(), 3);
//! # Ok::<(), docshelf::DocShelfError>(())
//! ```

pub mod actions;
pub mod command;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use command::parse_command;
pub use handler::{handle_event, Event};
pub use modes::ViewMode;
pub use state::AppState;
