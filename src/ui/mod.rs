//! User interface rendering layer.
//!
//! Transforms application state into ANSI-styled terminal output:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_layout → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready view model types
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers and the frame layout
//! - [`helpers`]: Cursor, highlighting, and number formatting utilities
//! - [`theme`]: Color themes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Body, CountryRow, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, StatLine, StatSection,
    SummaryRow, TabsInfo, UIViewModel,
};
