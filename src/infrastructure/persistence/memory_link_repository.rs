//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-local link storage.
///
/// Contents are lost on restart. Used for development and tests.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        match links.entry(new_link.short_id.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Short id '{}' already exists",
                new_link.short_id
            ))),
            Entry::Vacant(slot) => {
                let link = Link::from_new(new_link, Utc::now());
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.get(short_id).cloned())
    }

    async fn increment_clicks(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        let mut links = self.links.write().await;

        Ok(links.get_mut(short_id).map(|link| {
            link.clicks += 1;
            link.clone()
        }))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.read().await.len() as i64)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
