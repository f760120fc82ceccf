use std::path::PathBuf;
use std::sync::Arc;

use crate::app::Result;
use crate::config::Config;
use crate::fetcher::{Fetcher, HttpFetcher, ResourceClient};
use crate::router::Router;
use crate::view::{Document, RenderSink};

pub struct AppContext {
    pub config: Config,
    pub client: ResourceClient,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.api)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let client = ResourceClient::new(fetcher, &config.api);
        Self { config, client }
    }

    /// A fresh session rendering into `sink`.
    pub fn router<S: RenderSink>(&self, sink: S) -> Router<S> {
        Router::new(self.client.clone(), self.config.view.clone(), sink)
    }

    /// The configured HTML shell, or the built-in one.
    pub fn shell(&self) -> Result<Document> {
        match &self.config.output.shell {
            Some(path) => Document::load(path),
            None => Ok(Document::default()),
        }
    }

    /// `explicit` if given, otherwise the configured output file.
    pub fn output_path(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| self.config.output.path.clone())
    }
}
