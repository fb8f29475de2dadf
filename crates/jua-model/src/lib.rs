//! Record model for the jua directory generator.
//!
//! A [`Company`] is one directory listing. Everything the site builder needs
//! from a record lives here: validation, slug derivation, and the WhatsApp
//! click-to-chat link.

pub mod record;
pub mod slug;

pub use record::{Company, RecordError};
pub use slug::slugify;
