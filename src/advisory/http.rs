use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::advisory::{AdvisoryRequest, AdvisorySource};
use crate::config::AdvisorySettings;
use crate::error::AdvisoryError;

#[derive(Serialize)]
struct Body<'a> {
    #[serde(flatten)]
    request: &'a AdvisoryRequest,
    prompt: String,
}

#[derive(Deserialize)]
struct Reply {
    #[serde(rename = "move", alias = "bestmove", alias = "text")]
    mv: String,
}

/// Advisor reached over HTTP: POSTs the request as JSON, expects
/// `{"move": "..."}` or a bare text body. HTTP 429 is a quota signal.
pub struct HttpAdvisor {
    client: reqwest::Client,
    name: String,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpAdvisor {
    pub fn new(settings: &AdvisorySettings) -> Result<Self, AdvisoryError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| AdvisoryError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            name: settings.name.clone(),
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
        })
    }
}

fn parse_reply(body: &str) -> String {
    match serde_json::from_str::<Reply>(body) {
        Ok(r) => r.mv.trim().to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait]
impl AdvisorySource for HttpAdvisor {
    fn name(&self) -> &str { &self.name }

    async fn suggest(&self, request: &AdvisoryRequest) -> Result<String, AdvisoryError> {
        let body = Body { request, prompt: request.prompt() };
        let mut req = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }
        let resp = req.send().await.map_err(|e| AdvisoryError::Unavailable(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| AdvisoryError::Unavailable(e.to_string()))?;
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AdvisoryError::QuotaExhausted(format!("HTTP {status}: {text}")));
        }
        if !status.is_success() {
            return Err(AdvisoryError::classify(format!("HTTP {status}: {text}")));
        }
        debug!("{} replied: {}", self.name, text.trim());
        Ok(parse_reply(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_accepts_json_or_text() {
        assert_eq!(parse_reply(r#"{"move": " Nf3 "}"#), "Nf3");
        assert_eq!(parse_reply(r#"{"bestmove": "e2e4"}"#), "e2e4");
        assert_eq!(parse_reply("O-O\n"), "O-O");
    }
}
