use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::{FetchError, FrontpageError, Result};
use crate::config::ApiConfig;
use crate::domain::{Cursor, Page};
use crate::fetcher::{PostSource, TOP_WINDOW};
use crate::normalizer::Normalizer;

pub struct HttpPostSource {
    client: Client,
    endpoint: Url,
    normalizer: Normalizer,
}

impl HttpPostSource {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FrontpageError::Config(e.to_string()))?;

        Self::with_client(client, &config.base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base = if base_url.ends_with('/') {
            Url::parse(base_url)
        } else {
            Url::parse(&format!("{}/", base_url))
        }
        .map_err(FetchError::from)?;
        let endpoint = base.join("top").map_err(FetchError::from)?;

        Ok(Self {
            client,
            endpoint,
            normalizer: Normalizer::new(),
        })
    }

    fn request_url(
        &self,
        count: NonZeroU32,
        after: Option<&Cursor>,
        before: Option<&Cursor>,
    ) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &count.to_string());
            if let Some(after) = after {
                query.append_pair("after", after.as_str());
            }
            if let Some(before) = before {
                query.append_pair("before", before.as_str());
            }
            query.append_pair("t", TOP_WINDOW);
        }
        url
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    async fn fetch_top_page(
        &self,
        count: NonZeroU32,
        after: Option<&Cursor>,
        before: Option<&Cursor>,
    ) -> Result<Page> {
        let url = self.request_url(count, after, before);
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            }
            .into());
        }

        let body = response.bytes().await?;
        self.normalizer.normalize(&body)
    }
}
