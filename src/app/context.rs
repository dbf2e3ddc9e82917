use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpPostSource;
use crate::fetcher::PostSource;
use crate::repository::PostRepository;

pub struct AppContext {
    pub config: Config,
    pub repository: Arc<PostRepository>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let source: Arc<dyn PostSource + Send + Sync> =
            Arc::new(HttpPostSource::new(&config.api)?);
        Ok(Self::with_source(config, source))
    }

    pub fn with_source(config: Config, source: Arc<dyn PostSource + Send + Sync>) -> Self {
        let repository = Arc::new(PostRepository::with_max_items(
            source,
            config.listing.max_items,
        ));

        Self { config, repository }
    }
}
