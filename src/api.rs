// src/api.rs
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use urlencoding::encode;

use crate::error::{ApiError, Result};
use crate::model::ActivityCollection;

pub const ACTIVITIES_PATH: &str = "/activities";

pub fn signup_path(activity: &str, email: &str) -> String {
    mutation_path(activity, "signup", email)
}

pub fn unregister_path(activity: &str, email: &str) -> String {
    mutation_path(activity, "unregister", email)
}

fn mutation_path(activity: &str, verb: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_PATH}/{}/{verb}?email={}",
        encode(activity),
        encode(email)
    )
}

/// Body of a signup answer: `message` on success, `detail` on failure.
/// FastAPI validation errors put an array in `detail`, hence `Value`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SignupReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl SignupReply {
    pub fn detail_text(&self) -> Option<&str> {
        self.detail.as_ref().and_then(|d| d.as_str())
    }
}

/// Raw outcome of a signup POST, before it is turned into UI state.
#[derive(Debug)]
pub struct SignupResponse {
    pub ok: bool,
    pub status: u16,
    pub reply: std::result::Result<SignupReply, serde_json::Error>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn list_activities(&self) -> Result<ActivityCollection> {
        let resp = Request::get(&self.url(ACTIVITIES_PATH)).send().await?;
        if !resp.ok() {
            return Err(status_error(&resp).await);
        }
        let text = resp.text().await?;
        Ok(ActivityCollection::from_json(&text)?)
    }

    /// Only transport failures are errors here; a rejected signup still
    /// carries a body the form wants to show.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<SignupResponse> {
        let resp = Request::post(&self.url(&signup_path(activity, email)))
            .send()
            .await?;
        let (ok, status) = (resp.ok(), resp.status());
        let text = resp.text().await?;
        Ok(SignupResponse {
            ok,
            status,
            reply: serde_json::from_str(&text),
        })
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Result<()> {
        let resp = Request::post(&self.url(&unregister_path(activity, email)))
            .send()
            .await?;
        if resp.ok() {
            Ok(())
        } else {
            Err(status_error(&resp).await)
        }
    }
}

async fn status_error(resp: &Response) -> ApiError {
    let status = resp.status();
    let detail = match resp.text().await {
        Ok(text) => serde_json::from_str::<SignupReply>(&text)
            .ok()
            .and_then(|r| r.detail_text().map(str::to_owned)),
        Err(_) => None,
    };
    ApiError::Status { status, detail }
}
