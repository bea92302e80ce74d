use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::StorySource;
use crate::error::{Error, Result};
use crate::model::story::{Member, SearchResponse, Story};

const PAGE_SIZE: u32 = 25;

pub struct ShortcutClient {
    base_url: String,
    client: reqwest::Client,
}

impl ShortcutClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn get(&self, endpoint: &str, token: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/{endpoint}", self.base_url))
            .header("Content-Type", "application/json")
            .header("Shortcut-Token", token)
    }
}

/// Read the whole body and decode it. The HTTP status is not consulted:
/// whatever decodes is accepted, and a `null` body is the zero value.
async fn decode<T: DeserializeOwned + Default>(
    what: &'static str,
    resp: reqwest::Response,
) -> Result<T> {
    debug!(what, status = %resp.status(), "response received");
    let body = resp.text().await?;
    decode_body(what, body)
}

fn decode_body<T: DeserializeOwned + Default>(what: &'static str, body: String) -> Result<T> {
    match serde_json::from_str::<Option<T>>(&body) {
        Ok(value) => Ok(value.unwrap_or_default()),
        Err(error) => Err(Error::Decode { what, body, error }),
    }
}

pub fn search_body(mention_name: &str) -> serde_json::Value {
    serde_json::json!({
        "detail": "slim",
        "page_size": PAGE_SIZE,
        "query": format!("owner:{mention_name}"),
    })
}

#[async_trait]
impl StorySource for ShortcutClient {
    fn name(&self) -> &str {
        "Shortcut"
    }

    async fn member(&self, token: &str) -> Result<Member> {
        let resp = self.get("member", token).send().await?;
        decode("member", resp).await
    }

    async fn owned_stories(&self, token: &str, mention_name: &str) -> Result<Vec<Story>> {
        // GET with a JSON body is what the search endpoint expects.
        let resp = self
            .get("search", token)
            .json(&search_body(mention_name))
            .send()
            .await?;
        let search: SearchResponse = decode("story", resp).await?;

        let page = search.stories;
        if !page.next.is_empty() {
            debug!(total = page.total, next = %page.next, "more stories exist; only the first page is used");
        }
        Ok(page.data)
    }
}
