// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            blog::BlogCommandService, categories::CategoryCommandService,
            links::LinksCommandService, pages::PageCommandService,
            portfolio::PortfolioCommandService, storage::StorageService,
            users::UserCommandService,
        },
        ports::{
            security::{IdTokenVerifier, PasswordHasher, TokenManager},
            storage::FileStore,
            time::Clock,
        },
        queries::{
            blog::BlogQueryService, categories::CategoryQueryService, links::LinksQueryService,
            pages::PageQueryService, portfolio::PortfolioQueryService, users::UserQueryService,
        },
    },
    domain::{
        blog::{BlogCategoryRepository, BlogPostReadRepository, BlogPostWriteRepository},
        links::SocialLinksRepository,
        page::{PageReadRepository, PageWriteRepository},
        portfolio::{PortfolioReadRepository, PortfolioWriteRepository},
        user::UserRepository,
    },
};

/// Everything the application layer needs from the outside world, bundled so
/// the composition root stays readable.
pub struct Dependencies {
    pub users: Arc<dyn UserRepository>,
    pub blog_read: Arc<dyn BlogPostReadRepository>,
    pub blog_write: Arc<dyn BlogPostWriteRepository>,
    pub categories: Arc<dyn BlogCategoryRepository>,
    pub portfolio_read: Arc<dyn PortfolioReadRepository>,
    pub portfolio_write: Arc<dyn PortfolioWriteRepository>,
    pub page_read: Arc<dyn PageReadRepository>,
    pub page_write: Arc<dyn PageWriteRepository>,
    pub social_links: Arc<dyn SocialLinksRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub id_token_verifier: Option<Arc<dyn IdTokenVerifier>>,
    pub file_store: Arc<dyn FileStore>,
    pub clock: Arc<dyn Clock>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub blog_commands: Arc<BlogCommandService>,
    pub blog_queries: Arc<BlogQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub portfolio_commands: Arc<PortfolioCommandService>,
    pub portfolio_queries: Arc<PortfolioQueryService>,
    pub page_commands: Arc<PageCommandService>,
    pub page_queries: Arc<PageQueryService>,
    pub links_commands: Arc<LinksCommandService>,
    pub links_queries: Arc<LinksQueryService>,
    pub storage: Arc<StorageService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(deps: Dependencies) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&deps.users),
            Arc::clone(&deps.password_hasher),
            Arc::clone(&deps.token_manager),
            deps.id_token_verifier.clone(),
            Arc::clone(&deps.clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&deps.users)));

        let blog_commands = Arc::new(BlogCommandService::new(
            Arc::clone(&deps.blog_write),
            Arc::clone(&deps.blog_read),
            Arc::clone(&deps.clock),
        ));
        let blog_queries = Arc::new(BlogQueryService::new(Arc::clone(&deps.blog_read)));

        let category_commands =
            Arc::new(CategoryCommandService::new(Arc::clone(&deps.categories)));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&deps.categories)));

        let portfolio_commands = Arc::new(PortfolioCommandService::new(
            Arc::clone(&deps.portfolio_write),
            Arc::clone(&deps.portfolio_read),
            Arc::clone(&deps.clock),
        ));
        let portfolio_queries =
            Arc::new(PortfolioQueryService::new(Arc::clone(&deps.portfolio_read)));

        let page_commands = Arc::new(PageCommandService::new(
            Arc::clone(&deps.page_write),
            Arc::clone(&deps.page_read),
            Arc::clone(&deps.clock),
        ));
        let page_queries = Arc::new(PageQueryService::new(Arc::clone(&deps.page_read)));

        let links_commands = Arc::new(LinksCommandService::new(Arc::clone(&deps.social_links)));
        let links_queries = Arc::new(LinksQueryService::new(Arc::clone(&deps.social_links)));

        let storage = Arc::new(StorageService::new(Arc::clone(&deps.file_store)));

        Self {
            user_commands,
            user_queries,
            blog_commands,
            blog_queries,
            category_commands,
            category_queries,
            portfolio_commands,
            portfolio_queries,
            page_commands,
            page_queries,
            links_commands,
            links_queries,
            storage,
            token_manager: deps.token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
