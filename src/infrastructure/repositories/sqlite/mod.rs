// src/infrastructure/repositories/sqlite/mod.rs
mod blog;
mod categories;
mod links;
mod pages;
mod portfolio;
mod users;

pub use blog::SqliteBlogRepository;
pub use categories::SqliteCategoryRepository;
pub use links::SqliteSocialLinksRepository;
pub use pages::SqlitePageRepository;
pub use portfolio::SqlitePortfolioRepository;
pub use users::SqliteUserRepository;
