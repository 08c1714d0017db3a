//! Sidenav Autoclose - collapsing sections for tall documentation sidebars
//!
//! When a documentation sidebar is tall enough to scroll, only the section
//! the reader is in stays expanded:
//! - clicking a section header opens it and closes the others (or closes it
//!   when it is already open)
//! - arriving with a `#fragment`, following an in-page link, or scrolling to
//!   a new section opens the section that links to it
//!
//! The behavior lives in [`collapser::Collapser`], a plain Rust state
//! machine over the sidebar items. The `wasm` feature adds the browser
//! binding that reads the page, wires the events and renders the result.
//!
//! ## Example
//! ```rust
//! use sidenav_autoclose::prelude::*;
//!
//! let mut nav = Collapser::new(&[
//!     ItemSource::header("/guide/#install"),
//!     ItemSource::leaf("/guide/#linux"),
//!     ItemSource::header("/guide/#usage"),
//!     ItemSource::leaf("/guide/#cli"),
//! ]);
//!
//! // Collapse everything, then open the section holding the page fragment
//! nav.start(Some("https://docs.example/guide/#cli"));
//! assert_eq!(nav.selected_header(), Some(2));
//! assert_eq!(nav.visible_leaves(), vec![3]);
//!
//! // Push the changes to whatever displays the sidebar
//! let mut surface = RecordingSurface::new();
//! nav.flush(&mut surface);
//! ```

pub mod collapser;
pub mod config;
pub mod error;
pub mod fragment;
pub mod item;
pub mod surface;

// Re-export common types
pub mod prelude {
    pub use crate::collapser::{overflows, Collapser};
    pub use crate::config::NavConfig;
    pub use crate::error::{NavError, NavResult};
    pub use crate::fragment::extract_fragment;
    pub use crate::item::{ItemSource, NavItem, Visibility};
    pub use crate::surface::{NavSurface, RecordingSurface, SurfaceWrite};
}

#[cfg(feature = "wasm")]
pub mod wasm;
