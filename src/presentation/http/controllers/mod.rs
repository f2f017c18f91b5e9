// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod blog;
pub mod categories;
pub mod image;
pub mod links;
pub mod pages;
pub mod portfolio;
pub mod storage;

pub(crate) mod patch {
    use serde::{Deserialize, Deserializer};

    /// Deserializer for `Option<Option<T>>` request fields: a key present
    /// with `null` clears the stored value, an absent key leaves it alone.
    pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
