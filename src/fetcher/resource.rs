use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::app::{ReaderError, Result};
use crate::config::{ApiConfig, ITEM_ID_PLACEHOLDER};
use crate::domain::{DetailItem, FeedItem};
use crate::fetcher::Fetcher;

/// Fetches and decodes the two JSON resources of the news API.
///
/// Every call is exactly one request and one decode. There is no retry and
/// no caching here; callers that want the listing only once keep it
/// themselves (see [`Session`](crate::store::Session)).
#[derive(Clone)]
pub struct ResourceClient {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    feed_url: String,
    item_url: String,
}

impl ResourceClient {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, config: &ApiConfig) -> Self {
        Self {
            fetcher,
            feed_url: config.feed_url.clone(),
            item_url: config.item_url.clone(),
        }
    }

    /// GET `locator` and decode the body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, locator: &str) -> Result<T> {
        let url = Url::parse(locator)?;
        let body = self.fetcher.fetch(url.as_str()).await?;

        serde_json::from_slice(&body).map_err(|source| ReaderError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// The listing resource.
    pub async fn feed(&self) -> Result<Vec<FeedItem>> {
        self.get(&self.feed_url).await
    }

    /// The item resource for `id`, inserted into the locator as given.
    pub async fn detail(&self, id: &str) -> Result<DetailItem> {
        self.get(&self.item_locator(id)).await
    }

    pub fn item_locator(&self, id: &str) -> String {
        self.item_url.replace(ITEM_ID_PLACEHOLDER, id)
    }
}
