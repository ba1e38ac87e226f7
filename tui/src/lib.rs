//! Folio TUI - Terminal rendering of the portfolio page
//!
//! This crate draws a [`folio_core`] portfolio as a full-screen terminal
//! page with a typed hero line, animated skill bars, and a contact form.
//!
//! # Architecture
//!
//! - **Compositor**: Layered rendering with z-ordering for the menu, toasts, and modal
//! - **Hero**: Bridges the typed-text engine into the event loop
//! - **Page**: Builds the scrollable body and its section anchors
//! - **Widgets**: Skill bars, project modal, contact form, toasts

pub mod app;
pub mod compositor;
pub mod hero;
pub mod page;
pub mod theme;
pub mod widgets;

pub use app::App;
