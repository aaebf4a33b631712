//! Delivery collaborator: the Ultramsg WhatsApp gateway.
//!
//! One POST per reminder, no retries. The gateway reports success through a
//! `sent` field that has been observed as both the boolean `true` and the
//! string `"true"`, and group listings have arrived both as a bare JSON
//! array and wrapped in `{"groups": [...]}` - both shapes are accepted.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::constants;
use crate::error::AppError;

/// Gateway credential pair, opaque to the core. Constructed once from
/// configuration and passed explicitly; never read from ambient state.
#[derive(Debug, Clone)]
pub struct MessagingCredential {
    pub token: String,
    pub instance_id: String,
}

/// Result of a send attempt that reached the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    Rejected { error: String },
}

/// One WhatsApp group as reported by the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub participants_count: u32,
}

pub struct UltramsgClient {
    client: Client,
    credential: MessagingCredential,
    api_base: String,
}

impl UltramsgClient {
    pub fn new(credential: MessagingCredential, timeout_seconds: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(constants::USER_AGENT)
            .timeout(Duration::from_secs(timeout_seconds))
            .pool_max_idle_per_host(constants::HTTP_POOL_MAX_IDLE_PER_HOST)
            .build()?;
        Ok(Self {
            client,
            credential,
            api_base: constants::defaults::ULTRAMSG_API_BASE.to_string(),
        })
    }

    /// Overrides the gateway base URL. Used by tests to point at a mock
    /// server.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Sends a chat message to an individual number or group id.
    ///
    /// A 2xx response with a truthy `sent` field is [`SendOutcome::Sent`];
    /// a 2xx response without one is [`SendOutcome::Rejected`] carrying the
    /// gateway's error text. Non-2xx statuses and transport failures are
    /// errors. Never retries.
    pub async fn send_chat(&self, to: &str, body: &str) -> Result<SendOutcome, AppError> {
        let url = format!(
            "{}/{}/messages/chat",
            self.api_base, self.credential.instance_id
        );
        let payload = serde_json::json!({
            "token": self.credential.token,
            "to": to,
            "body": body,
        });

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::gateway_status(
                status.as_u16(),
                "message send rejected",
                &url,
            ));
        }

        let value: Value = response.json().await?;
        if is_truthy(value.get("sent")) {
            Ok(SendOutcome::Sent)
        } else {
            Ok(SendOutcome::Rejected {
                error: render_error_field(value.get("error")),
            })
        }
    }

    /// Lists the WhatsApp groups visible to the gateway instance.
    pub async fn list_groups(&self) -> Result<Vec<GroupInfo>, AppError> {
        let url = format!("{}/{}/groups", self.api_base, self.credential.instance_id);

        let response = self
            .client
            .get(&url)
            .query(&[("token", self.credential.token.as_str())])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::gateway_status(
                status.as_u16(),
                "group listing rejected",
                &url,
            ));
        }

        parse_groups(response.json().await?)
    }
}

/// The gateway's `sent` flag: boolean `true` or the string `"true"`.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn render_error_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "Unknown error".to_string(),
    }
}

/// Accepts both group listing shapes: a bare array, or an object with a
/// `groups` array.
fn parse_groups(value: Value) -> Result<Vec<GroupInfo>, AppError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("groups") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(AppError::delivery_error(
                    "unexpected group listing response shape",
                ));
            }
        },
        _ => {
            return Err(AppError::delivery_error(
                "unexpected group listing response shape",
            ));
        }
    };

    items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<GroupInfo>, _>>()
        .map_err(Into::into)
}
