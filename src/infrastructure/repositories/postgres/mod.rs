// src/infrastructure/repositories/postgres/mod.rs
mod blog;
mod categories;
mod links;
mod pages;
mod portfolio;
mod users;

pub use blog::PostgresBlogRepository;
pub use categories::PostgresCategoryRepository;
pub use links::PostgresSocialLinksRepository;
pub use pages::PostgresPageRepository;
pub use portfolio::PostgresPortfolioRepository;
pub use users::PostgresUserRepository;
