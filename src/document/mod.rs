mod core;
mod types;

pub use core::Document;
pub use types::{EntityMention, Sentence};
