// src/domain/user/mod.rs
mod entity;
mod repository;
mod value_objects;

pub use entity::{NewUser, User, UserUpdate};
pub use repository::UserRepository;
pub use value_objects::{Email, PasswordHash, UserId};
