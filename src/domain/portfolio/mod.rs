// src/domain/portfolio/mod.rs
mod entity;
mod repository;
mod value_objects;

pub use entity::{PortfolioItem, PortfolioItemChanges};
pub use repository::{PortfolioReadRepository, PortfolioWriteRepository};
pub use value_objects::{
    CaseResults, Illustration, Objective, ObjectiveColor, PortfolioImages, Reflections,
};
