pub mod http_fetcher;
pub mod resource;

use async_trait::async_trait;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;
pub use resource::ResourceClient;

/// Transport for the resource client: one GET, the raw body back.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
