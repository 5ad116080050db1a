//! UI rendering module
//!
//! All the terminal rendering logic, built on ratatui. Each screen gets its
//! own submodule; the custom chart widgets live under `widgets`.

pub mod break_detail;
pub mod break_list;
pub mod favorites_view;
pub mod help_overlay;
pub mod widgets;

pub use break_detail::render as render_break_detail;
pub use break_list::render_break_list;
pub use favorites_view::render as render_favorites;
pub use help_overlay::render as render_help_overlay;
