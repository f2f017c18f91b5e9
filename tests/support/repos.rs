// tests/support/repos.rs
//
// In-memory repository fakes backing the e2e suite. They honor the same
// contracts as the sqlx implementations: conflict on duplicate insert,
// not-found on missing updates/deletes.
use async_trait::async_trait;
use atelier_cms::domain::{
    blog::{
        BlogCategory, BlogCategoryRepository, BlogPost, BlogPostChanges, BlogPostReadRepository,
        BlogPostWriteRepository, CategoryName,
    },
    content::Slug,
    errors::{DomainError, DomainResult},
    links::{SocialLinks, SocialLinksRepository, SocialLinksUpdate},
    page::{Page, PageChanges, PageReadRepository, PageWriteRepository},
    portfolio::{
        PortfolioItem, PortfolioItemChanges, PortfolioReadRepository, PortfolioWriteRepository,
    },
    user::{Email, NewUser, User, UserId, UserRepository, UserUpdate},
};
use std::{
    collections::HashMap,
    sync::Mutex,
};

fn conflict() -> DomainError {
    DomainError::Conflict("unique constraint violated".into())
}

#[derive(Default)]
pub struct InMemoryBlogRepo {
    posts: Mutex<HashMap<String, BlogPost>>,
}

#[async_trait]
impl BlogPostWriteRepository for InMemoryBlogRepo {
    async fn insert(&self, post: BlogPost) -> DomainResult<BlogPost> {
        let mut posts = self.posts.lock().unwrap();
        if posts.contains_key(post.slug.as_str()) {
            return Err(conflict());
        }
        posts.insert(post.slug.as_str().to_string(), post.clone());
        Ok(post)
    }

    async fn update(&self, slug: &Slug, changes: BlogPostChanges) -> DomainResult<BlogPost> {
        let mut posts = self.posts.lock().unwrap();
        let existing = posts
            .get(slug.as_str())
            .cloned()
            .ok_or_else(|| DomainError::NotFound("blog post not found".into()))?;
        let updated = existing.apply_changes(slug.clone(), changes);
        posts.insert(slug.as_str().to_string(), updated.clone());
        Ok(updated)
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        posts
            .remove(slug.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("blog post not found".into()))
    }
}

#[async_trait]
impl BlogPostReadRepository for InMemoryBlogRepo {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>> {
        Ok(self.posts.lock().unwrap().get(slug.as_str()).cloned())
    }

    async fn list(&self, published_only: bool) -> DomainResult<Vec<BlogPost>> {
        let mut posts: Vec<BlogPost> = self
            .posts
            .lock()
            .unwrap()
            .values()
            .filter(|post| !published_only || post.published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts)
    }
}

#[derive(Default)]
pub struct InMemoryPortfolioRepo {
    items: Mutex<HashMap<String, PortfolioItem>>,
}

#[async_trait]
impl PortfolioWriteRepository for InMemoryPortfolioRepo {
    async fn insert(&self, item: PortfolioItem) -> DomainResult<PortfolioItem> {
        let mut items = self.items.lock().unwrap();
        if items.contains_key(item.slug.as_str()) {
            return Err(conflict());
        }
        items.insert(item.slug.as_str().to_string(), item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        slug: &Slug,
        changes: PortfolioItemChanges,
    ) -> DomainResult<PortfolioItem> {
        let mut items = self.items.lock().unwrap();
        let existing = items
            .get(slug.as_str())
            .cloned()
            .ok_or_else(|| DomainError::NotFound("portfolio item not found".into()))?;
        let updated = existing.apply_changes(slug.clone(), changes);
        items.insert(slug.as_str().to_string(), updated.clone());
        Ok(updated)
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<()> {
        let mut items = self.items.lock().unwrap();
        items
            .remove(slug.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("portfolio item not found".into()))
    }
}

#[async_trait]
impl PortfolioReadRepository for InMemoryPortfolioRepo {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<PortfolioItem>> {
        Ok(self.items.lock().unwrap().get(slug.as_str()).cloned())
    }

    async fn list(&self, published_only: bool) -> DomainResult<Vec<PortfolioItem>> {
        let mut items: Vec<PortfolioItem> = self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|item| !published_only || item.published)
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then(b.updated_at.cmp(&a.updated_at))
        });
        Ok(items)
    }
}

#[derive(Default)]
pub struct InMemoryPageRepo {
    pages: Mutex<HashMap<String, Page>>,
}

#[async_trait]
impl PageWriteRepository for InMemoryPageRepo {
    async fn insert(&self, page: Page) -> DomainResult<Page> {
        let mut pages = self.pages.lock().unwrap();
        if pages.contains_key(page.slug.as_str()) {
            return Err(conflict());
        }
        pages.insert(page.slug.as_str().to_string(), page.clone());
        Ok(page)
    }

    async fn update(&self, slug: &Slug, changes: PageChanges) -> DomainResult<Page> {
        let mut pages = self.pages.lock().unwrap();
        let existing = pages
            .get(slug.as_str())
            .cloned()
            .ok_or_else(|| DomainError::NotFound("page not found".into()))?;
        let updated = existing.apply_changes(slug.clone(), changes);
        pages.insert(slug.as_str().to_string(), updated.clone());
        Ok(updated)
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<()> {
        let mut pages = self.pages.lock().unwrap();
        pages
            .remove(slug.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("page not found".into()))
    }
}

#[async_trait]
impl PageReadRepository for InMemoryPageRepo {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        Ok(self.pages.lock().unwrap().get(slug.as_str()).cloned())
    }

    async fn list(&self, published_only: bool) -> DomainResult<Vec<Page>> {
        let mut pages: Vec<Page> = self
            .pages
            .lock()
            .unwrap()
            .values()
            .filter(|page| !published_only || page.published)
            .cloned()
            .collect();
        pages.sort_by(|a, b| a.slug.as_str().cmp(b.slug.as_str()));
        Ok(pages)
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepo {
    categories: Mutex<HashMap<String, BlogCategory>>,
}

#[async_trait]
impl BlogCategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: BlogCategory) -> DomainResult<BlogCategory> {
        let mut categories = self.categories.lock().unwrap();
        if categories.contains_key(category.slug.as_str()) {
            return Err(conflict());
        }
        categories.insert(category.slug.as_str().to_string(), category.clone());
        Ok(category)
    }

    async fn rename(&self, slug: &Slug, name: CategoryName) -> DomainResult<BlogCategory> {
        let mut categories = self.categories.lock().unwrap();
        let category = categories
            .get_mut(slug.as_str())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        category.name = name;
        Ok(category.clone())
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<()> {
        let mut categories = self.categories.lock().unwrap();
        categories
            .remove(slug.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogCategory>> {
        Ok(self.categories.lock().unwrap().get(slug.as_str()).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<BlogCategory>> {
        let mut categories: Vec<BlogCategory> =
            self.categories.lock().unwrap().values().cloned().collect();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }
}

#[derive(Default)]
pub struct InMemoryLinksRepo {
    links: Mutex<Option<SocialLinks>>,
}

#[async_trait]
impl SocialLinksRepository for InMemoryLinksRepo {
    async fn get(&self) -> DomainResult<Option<SocialLinks>> {
        Ok(self.links.lock().unwrap().clone())
    }

    async fn upsert(&self, update: SocialLinksUpdate) -> DomainResult<SocialLinks> {
        let mut links = self.links.lock().unwrap();
        let mut current = links.clone().unwrap_or_default();
        if let Some(instagram) = update.instagram {
            current.instagram = Some(instagram);
        }
        if let Some(linkedin) = update.linkedin {
            current.linkedin = Some(linkedin);
        }
        *links = Some(current.clone());
        Ok(current)
    }
}

#[derive(Default)]
pub struct InMemoryUserRepo {
    state: Mutex<(i64, HashMap<i64, User>)>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if state
            .1
            .values()
            .any(|existing| existing.email == user.email)
        {
            return Err(conflict());
        }
        state.0 += 1;
        let id = state.0;
        let stored = User {
            id: UserId::new(id)?,
            email: user.email,
            password_hash: user.password_hash,
            display_name: user.display_name,
            photo_url: user.photo_url,
            created_at: user.created_at,
            updated_at: user.created_at,
        };
        state.1.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        let user = state
            .1
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().unwrap().1.get(&i64::from(id)).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .1
            .values()
            .find(|user| &user.email == email)
            .cloned())
    }
}
