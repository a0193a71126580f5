use std::time::Duration;

use reqwest::{
    header::{
        ACCEPT,
        USER_AGENT,
    },
    Client,
    Response,
};

use crate::core::{
    Judgement,
    WordEntry,
    WordstackError,
};

const WORDS_PATH: &str = "/api/words";
const UPDATE_PATH: &str = "/api/update";

pub fn http_client(timeout: Duration) -> Result<Client, WordstackError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| WordstackError::Custom(format!("HTTP client build failed: {e}")))
}

/// Client for the word server's two endpoints.
#[derive(Debug, Clone)]
pub struct WordApi {
    client: Client,
    base_url: String,
}

impl WordApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, WordstackError> {
        Ok(Self { client: http_client(timeout)?, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn words_url(&self) -> String {
        format!("{}{}", self.base_url, WORDS_PATH)
    }

    pub fn update_url(&self) -> String {
        format!("{}{}", self.base_url, UPDATE_PATH)
    }

    pub async fn fetch_words(&self) -> Result<Vec<WordEntry>, WordstackError> {
        self.try_fetch_words().await.map_err(|e| WordstackError::Fetch(e.to_string()))
    }

    pub async fn report(&self, judgement: &Judgement) -> Result<(), WordstackError> {
        self.try_report(judgement).await.map_err(|e| WordstackError::Report(e.to_string()))
    }

    async fn try_fetch_words(&self) -> Result<Vec<WordEntry>, WordstackError> {
        let resp = self
            .client
            .get(self.words_url())
            .header(USER_AGENT, "wordstack/0.1 (+reqwest)")
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let resp = ensure_success(resp)?;
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn try_report(&self, judgement: &Judgement) -> Result<(), WordstackError> {
        let resp = self
            .client
            .post(self.update_url())
            .header(USER_AGENT, "wordstack/0.1 (+reqwest)")
            .json(judgement)
            .send()
            .await?;

        ensure_success(resp)?;
        Ok(())
    }
}

fn ensure_success(resp: Response) -> Result<Response, WordstackError> {
    if !resp.status().is_success() {
        return Err(WordstackError::Http {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp)
}
