//! REST access method for the hosted document store.
//!
//! Collections map onto paths: `GET /{collection}` returns the full scan as a
//! JSON array (each document carrying its generated `id`), `POST /{collection}`
//! appends one document and answers `{"id": "..."}`, `DELETE /{collection}/{id}`
//! removes one document.
//!

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use bousai_formats::Collection;

use crate::{Auth, DocumentStore, StoreError};

/// A live connection to one store endpoint.
///
#[derive(Clone, Debug)]
pub struct RestStore {
    /// Base URL (to avoid repeating)
    base_url: String,
    /// Credentials
    auth: Auth,
    client: Client,
}

impl RestStore {
    pub fn new(base_url: &str, auth: Auth) -> Self {
        RestStore {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            client: Client::new(),
        }
    }

    #[inline]
    fn url(&self, collection: Collection) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    /// Add the standard headers, plus the API key when we have one.
    ///
    fn prepare(&self, req: RequestBuilder) -> RequestBuilder {
        let req = req.header(
            "user-agent",
            format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        );
        match &self.auth {
            Auth::Key { api_key } => req.header("x-api-key", api_key),
            Auth::Anon => req,
        }
    }
}

/// What the store answers on append.
///
#[derive(Debug, Deserialize)]
struct AddResponse {
    id: String,
}

#[async_trait]
impl DocumentStore for RestStore {
    #[tracing::instrument(skip(self))]
    async fn get_all(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        let url = self.url(collection);
        trace!("Fetching data through {}…", url);

        let resp = self.prepare(self.client.get(&url)).send().await?;
        match resp.status() {
            StatusCode::OK => (),
            code => return Err(StoreError::Status(code, url)),
        }

        let docs: Vec<Value> = resp.json().await?;
        debug!("{} documents from {}", docs.len(), collection);
        Ok(docs)
    }

    #[tracing::instrument(skip(self, doc))]
    async fn add(&self, collection: Collection, doc: &Value) -> Result<String, StoreError> {
        let url = self.url(collection);
        trace!("Appending document through {}…", url);

        let resp = self.prepare(self.client.post(&url)).json(doc).send().await?;
        match resp.status() {
            StatusCode::OK | StatusCode::CREATED => (),
            code => return Err(StoreError::Status(code, url)),
        }

        let resp: AddResponse = resp.json().await?;
        debug!("new document {} in {}", resp.id, collection);
        Ok(resp.id)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let url = format!("{}/{}", self.url(collection), id);
        trace!("Deleting document through {}…", url);

        let resp = self.prepare(self.client.delete(&url)).send().await?;
        match resp.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            code => Err(StoreError::Status(code, url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_all() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/citizen");
                then.status(200)
                    .json_body(json!([{"id": "c1", "name": "x"}]));
            })
            .await;

        let store = RestStore::new(&server.base_url(), Auth::Anon);
        let docs = store.get_all(Collection::Citizen).await.unwrap();

        mock.assert_async().await;
        assert_eq!(1, docs.len());
    }

    #[tokio::test]
    async fn test_get_all_bad_status() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/rescue");
                then.status(500);
            })
            .await;

        let store = RestStore::new(&server.base_url(), Auth::Anon);
        let res = store.get_all(Collection::Rescue).await;
        assert!(matches!(res, Err(StoreError::Status(..))));
    }

    #[tokio::test]
    async fn test_add_sends_api_key() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/alert")
                    .header("x-api-key", "sesame");
                then.status(201).json_body(json!({"id": "a42"}));
            })
            .await;

        let store = RestStore::new(
            &server.base_url(),
            Auth::Key {
                api_key: "sesame".to_string(),
            },
        );
        let id = store
            .add(Collection::Alert, &json!({"text": "hi"}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!("a42", id);
    }

    #[tokio::test]
    async fn test_delete() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/alert/a42");
                then.status(204);
            })
            .await;

        let store = RestStore::new(&server.base_url(), Auth::Anon);
        store.delete(Collection::Alert, "a42").await.unwrap();
        mock.assert_async().await;
    }
}
