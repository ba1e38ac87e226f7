//! Folio Core - Headless Hero Animation and Page State
//!
//! This crate holds everything about the portfolio that is not drawing:
//! the typed-text hero engine, the page's UI state, portfolio content,
//! contact-form validation, and configuration loading. A terminal surface
//! (or any other host with a timer) sits on top and renders what it is told.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Surfaces                               │
//! │   ┌─────────────┐   ┌──────────────┐   ┌─────────────────┐   │
//! │   │ folio-tui   │   │ --ticker     │   │ tests / headless│   │
//! │   │ (ratatui)   │   │ (stdout)     │   │                 │   │
//! │   └──────┬──────┘   └──────┬───────┘   └────────┬────────┘   │
//! │          └─────────────────┴────────────────────┘            │
//! │                  display strings (down)                       │
//! └──────────────────────────┬───────────────────────────────────┘
//!                            │
//! ┌──────────────────────────┴───────────────────────────────────┐
//! │                       FOLIO CORE                              │
//! │  ┌──────────────┐ ┌───────────┐ ┌──────────┐ ┌────────────┐  │
//! │  │ TypedText    │ │ PageState │ │ Contact  │ │  Config    │  │
//! │  │ Engine       │ │           │ │ Form     │ │  (TOML)    │  │
//! │  └──────────────┘ └───────────┘ └──────────┘ └────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_core::{PhraseList, TypedTextEngine, TypingCadence};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let phrases = PhraseList::new(["Full-Stack Developer", "Problem Solver"])?;
//!     let engine = TypedTextEngine::new(phrases, TypingCadence::default());
//!
//!     let handle = engine.start(|text| println!("{text}"))?;
//!
//!     tokio::time::sleep(std::time::Duration::from_secs(5)).await;
//!     handle.cancel();
//!     Ok(())
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`engine`]: Typed-text state machine (pure transitions, display, delays)
//! - [`driver`]: Self-rescheduling async driver and its cancel handle
//! - [`easing`]: Easing curves for bar fills and slide-ins
//! - [`content`]: Portfolio content model with the built-in defaults
//! - [`page`]: Scroll, menu, modal, tab, and theme coordination
//! - [`contact`]: Contact form validation and delivery sink
//! - [`config`]: TOML/env/CLI configuration loading
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod contact;
pub mod content;
pub mod driver;
pub mod easing;
pub mod engine;
pub mod page;

// Re-exports for convenience
pub use config::{
    default_config_path, load_config, load_config_from_path, split_phrases, ConfigError,
    ConfigOverrides, ConfigSource, FolioConfig, FolioToml,
};
pub use contact::{ContactError, ContactForm, ContactOutcome, ContactSink, ContactSubmission, LogSink};
pub use content::{Hero, Portfolio, Project, Skill, SkillSet, SkillTab, SocialLink, TimelineEntry};
pub use driver::CancelHandle;
pub use easing::Easing;
pub use engine::{
    display_string, transition, Direction, EngineError, Frame, PhraseList, Transition,
    TypedState, TypedTextEngine, TypingCadence, CURSOR_GLYPH,
};
pub use page::{PageState, Section, Theme};
