//! Domain entities - the core business objects.

pub mod engagement;

mod post;
mod profile;

pub use post::{Comment, Like, Post, MAX_TEXT_LEN, validate_text};
pub use profile::Profile;
