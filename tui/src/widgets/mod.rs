//! Widgets
//!
//! Page pieces that need more than a styled line: skill bars, the project
//! modal, the contact form, toasts, and a scrollable text block.

pub mod contact_form;
pub mod modal;
pub mod skill_bar;
pub mod text_block;
pub mod toast;

pub use contact_form::{ContactFormState, ContactFormView, FormField};
pub use modal::{modal_area, ProjectModal};
pub use skill_bar::SkillBar;
pub use text_block::{TextBlock, TextBlockState};
pub use toast::{ToastKind, ToastStack};
