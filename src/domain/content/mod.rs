// src/domain/content/mod.rs
mod publish;
mod slug;
mod text;

pub use publish::PublishTransition;
pub use slug::Slug;
pub use text::{Body, Title};
