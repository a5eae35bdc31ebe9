//! HTTP catalog client - reqwest adapter for the catalog proxy

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::outbound::{CatalogError, CatalogPort};
use crate::domain::entities::{ClassDetail, EntityKind, RaceDetail};

/// Client for the charforge-catalog proxy
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_detail<T>(
        &self,
        route: &str,
        body: serde_json::Value,
        kind: EntityKind,
        index: &str,
    ) -> Result<T, CatalogError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}/{route}", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| CatalogError::ProviderUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::NotFound {
                kind,
                index: index.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl CatalogPort for HttpCatalogClient {
    async fn list(&self, kind: EntityKind) -> Result<Vec<String>, CatalogError> {
        let route = match kind {
            EntityKind::Race => "get_races",
            EntityKind::Class => "get_classes",
        };

        let response = self
            .client
            .post(format!("{}/{route}", self.base_url))
            .json(&json!({}))
            .send()
            .await
            .map_err(|e| CatalogError::ProviderUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::ProviderUnavailable(format!(
                "catalog returned {}",
                response.status()
            )));
        }

        let listing: IndexListing = response
            .json()
            .await
            .map_err(|e| CatalogError::MalformedResponse(e.to_string()))?;

        Ok(listing.results.into_iter().map(|e| e.index).collect())
    }

    async fn race_detail(&self, index: &str) -> Result<RaceDetail, CatalogError> {
        self.post_detail(
            "get_race_info",
            json!({ "race": index }),
            EntityKind::Race,
            index,
        )
        .await
    }

    async fn class_detail(&self, index: &str) -> Result<ClassDetail, CatalogError> {
        self.post_detail(
            "get_class_info",
            json!({ "class": index }),
            EntityKind::Class,
            index,
        )
        .await
    }
}

/// `{ results: [ { index, ... } ] }` shape shared by both list endpoints
#[derive(Debug, Deserialize)]
struct IndexListing {
    results: Vec<IndexEntry>,
}

#[derive(Debug, Deserialize)]
struct IndexEntry {
    index: String,
}
