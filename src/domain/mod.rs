//! Domain models for template setup
//!
//! Pure logic without any I/O concerns.

mod slug;
mod identity;

pub use slug::Slug;
pub use identity::{ProjectIdentity, TemplateGuard, TEMPLATE_SCHEME};
