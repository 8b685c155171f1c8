//! Realtime Database REST client
//!
//! Every collection is `{base}/{collection}.json`, every record
//! `{base}/{collection}/{key}.json`. Keys for new records are generated by
//! the server on POST.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::StoreConfig;
use crate::domain::{DomainError, DomainResult};
use super::traits::DocumentStore;

/// Characters escaped inside a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'.')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// HTTP client for a Realtime Database instance
#[derive(Clone)]
pub struct RtdbStore {
    client: reqwest::Client,
    config: StoreConfig,
}

/// Body returned by POST
#[derive(Deserialize)]
struct PushResponse {
    name: String,
}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::Unavailable(e.to_string())
    }
}

impl RtdbStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/{}.json{}",
            self.config.database_url,
            utf8_percent_encode(collection, PATH_SEGMENT),
            self.query()
        )
    }

    pub fn record_url(&self, collection: &str, key: &str) -> String {
        format!(
            "{}/{}/{}.json{}",
            self.config.database_url,
            utf8_percent_encode(collection, PATH_SEGMENT),
            utf8_percent_encode(key, PATH_SEGMENT),
            self.query()
        )
    }

    fn query(&self) -> String {
        let mut params = Vec::new();
        if let Some(token) = &self.config.auth_token {
            params.push(format!("auth={}", utf8_percent_encode(token, NON_ALPHANUMERIC)));
        }
        if let Some(ns) = &self.config.namespace {
            params.push(format!("ns={}", utf8_percent_encode(ns, NON_ALPHANUMERIC)));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Interpret a collection read.
pub fn parse_collection(body: Value) -> DomainResult<Map<String, Value>> {
    match body {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => Ok(map),
        // Collections whose keys are all small integers come back as arrays
        Value::Array(values) => Ok(values
            .into_iter()
            .enumerate()
            .filter(|(_, v)| !v.is_null())
            .map(|(i, v)| (i.to_string(), v))
            .collect()),
        other => Err(DomainError::Internal(format!("unexpected collection payload: {}", other))),
    }
}

#[async_trait(?Send)]
impl DocumentStore for RtdbStore {
    async fn get_collection(&self, collection: &str) -> DomainResult<Map<String, Value>> {
        log::debug!("GET {}", collection);
        let body: Value = self
            .client
            .get(self.collection_url(collection))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        parse_collection(body)
    }

    async fn get(&self, collection: &str, key: &str) -> DomainResult<Option<Value>> {
        log::debug!("GET {}/{}", collection, key);
        let body: Value = self
            .client
            .get(self.record_url(collection, key))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(if body.is_null() { None } else { Some(body) })
    }

    async fn push(&self, collection: &str, value: Value) -> DomainResult<String> {
        log::debug!("POST {}", collection);
        let response: PushResponse = self
            .client
            .post(self.collection_url(collection))
            .json(&value)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.name)
    }

    async fn update(&self, collection: &str, key: &str, patch: Value) -> DomainResult<()> {
        log::debug!("PATCH {}/{}", collection, key);
        self.client
            .patch(self.record_url(collection, key))
            .json(&patch)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn remove(&self, collection: &str, key: &str) -> DomainResult<()> {
        log::debug!("DELETE {}/{}", collection, key);
        self.client
            .delete(self.record_url(collection, key))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
