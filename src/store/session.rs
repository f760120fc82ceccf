use crate::app::Result;
use crate::domain::{FeedItem, Page};
use crate::fetcher::ResourceClient;

/// In-memory state for one run of the reader.
///
/// Holds the current page and the listing, which is fetched the first time
/// it is needed and reused afterwards. Nothing here outlives the process.
#[derive(Debug, Default)]
pub struct Session {
    current_page: Page,
    feed: Option<Vec<FeedItem>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn set_current_page(&mut self, page: Page) {
        self.current_page = page;
    }

    /// Cached listing, fetching it through `client` on first use.
    pub async fn get_or_load_feed(&mut self, client: &ResourceClient) -> Result<&[FeedItem]> {
        if self.feed.is_none() {
            let mut items = client.feed().await?;
            for item in &mut items {
                item.read = false;
            }
            tracing::info!("Loaded {} stories", items.len());
            self.feed = Some(items);
        }

        Ok(self.feed.as_deref().unwrap_or_default())
    }

    pub fn feed(&self) -> Option<&[FeedItem]> {
        self.feed.as_deref()
    }

    pub fn is_feed_loaded(&self) -> bool {
        self.feed.is_some()
    }

    /// Flag the cached story `id` as read. Returns false when the story is
    /// not in the cached listing (or the listing hasn't been loaded yet).
    pub fn mark_read(&mut self, id: u64) -> bool {
        let Some(item) = self
            .feed
            .as_mut()
            .and_then(|items| items.iter_mut().find(|item| item.id == id))
        else {
            return false;
        };

        item.read = true;
        true
    }
}
