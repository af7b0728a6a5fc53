//! JSON file implementation of link repository.
//!
//! The whole mapping set lives in one JSON object keyed by short id:
//!
//! ```json
//! {
//!   "abc123": {
//!     "originalUrl": "https://example.com",
//!     "createdAt": "2024-01-01T00:00:00Z",
//!     "clicks": 0
//!   }
//! }
//! ```
//!
//! Every write loads the file, mutates the map and rewrites it. Writers are
//! serialized by an async mutex and the new content is written to a temp file
//! that replaces the target with a rename, so readers always see a complete
//! document and concurrent writers cannot drop each other's updates.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// One entry of the JSON document.
///
/// `shortUrl` is kept when present so files written by older deployments
/// round-trip unchanged; `clicks` defaults to zero for the same reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLink {
    original_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    short_url: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    clicks: i64,
}

impl StoredLink {
    fn into_link(self, short_id: String) -> Link {
        Link::new(short_id, self.original_url, self.created_at, self.clicks)
    }
}

type LinkMap = BTreeMap<String, StoredLink>;

/// Link storage backed by a single JSON file.
pub struct FileLinkRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLinkRepository {
    /// Opens the store at `path`, creating an empty `{}` document (and any
    /// missing parent directories) if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the file cannot be created or an
    /// existing file is not a valid mapping document.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        if !fs::try_exists(&path).await? {
            fs::write(&path, b"{}").await?;
            info!("Created mapping file {}", path.display());
        }

        let repo = Self {
            path,
            write_lock: Mutex::new(()),
        };

        let links = repo.read_all().await?;
        debug!(
            "Loaded {} mappings from {}",
            links.len(),
            repo.path.display()
        );

        Ok(repo)
    }

    async fn read_all(&self) -> Result<LinkMap, AppError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LinkMap::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write_all(&self, links: &LinkMap) -> Result<(), AppError> {
        let json = serde_json::to_vec_pretty(links)?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, json).await?;
        fs::rename(&tmp_path, &self.path).await?;

        Ok(())
    }
}

#[async_trait]
impl LinkRepository for FileLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut links = self.read_all().await?;
        if links.contains_key(&new_link.short_id) {
            return Err(AppError::conflict(format!(
                "Short id '{}' already exists",
                new_link.short_id
            )));
        }

        let link = Link::from_new(new_link, Utc::now());
        links.insert(
            link.short_id.clone(),
            StoredLink {
                original_url: link.original_url.clone(),
                short_url: None,
                created_at: link.created_at,
                clicks: link.clicks,
            },
        );
        self.write_all(&links).await?;

        Ok(link)
    }

    async fn find_by_code(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        let mut links = self.read_all().await?;

        Ok(links
            .remove(short_id)
            .map(|stored| stored.into_link(short_id.to_string())))
    }

    async fn increment_clicks(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut links = self.read_all().await?;
        let Some(stored) = links.get_mut(short_id) else {
            return Ok(None);
        };

        stored.clicks += 1;
        let link = stored.clone().into_link(short_id.to_string());
        self.write_all(&links).await?;

        Ok(Some(link))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.read_all().await?.len() as i64)
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
