use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use validator::Validate;

use crate::constants::*;
use crate::validation::*;

/// A single past draw as reported by the server. Rendered in the order received.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HistoryEntry {
    pub time: String,
    pub prize: String,
    pub nickname: String,
}

/// One prize of the active configuration, as embedded in the page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeSlice {
    pub name: String,
    pub probability: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConfigSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SelectedConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub prizes: Vec<PrizeSlice>,
}

/// Bootstrap data the server renders into the page for the client to pick up.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PageData {
    #[serde(default)]
    pub configs: Vec<ConfigSummary>,
    #[serde(default)]
    pub selected: Option<SelectedConfig>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub activities: Vec<String>,
    /// Archived activity whose draws `history` holds; `None` for the live draws.
    #[serde(default)]
    pub activity: Option<String>,
}

impl PageData {
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|config| config.id.as_str())
    }

    /// Heading for the history panel: the archived activity's name, or the
    /// live draws when none is open.
    pub fn history_heading(&self) -> String {
        match self.activity.as_deref().map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => format!("{}{}", ACTIVITY_HISTORY_PREFIX, name),
            None => CURRENT_HISTORY_HEADING.to_string(),
        }
    }
}

// === API Types ===

/// Request body sent as `application/x-www-form-urlencoded`.
pub trait FormRequest {
    const ENDPOINT: &'static str;
    type Response: DeserializeOwned;

    fn form_pairs(&self) -> Vec<(&'static str, &str)>;

    fn to_form_body(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.form_pairs() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct DrawRequest {
    #[validate(custom = "validate_config_id")]
    pub config_id: String,
    #[validate(custom = "validate_nickname")]
    pub nickname: String,
    pub draw_name: String,
}

impl DrawRequest {
    pub fn new(config_id: Option<&str>, nickname: &str, draw_name: &str) -> Self {
        Self {
            config_id: config_id.map(str::trim).unwrap_or_default().to_string(),
            nickname: nickname.trim().to_string(),
            draw_name: draw_name.trim().to_string(),
        }
    }
}

impl FormRequest for DrawRequest {
    const ENDPOINT: &'static str = DRAW_ENDPOINT;
    type Response = DrawResponse;

    fn form_pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("config_id", self.config_id.as_str()),
            ("nickname", self.nickname.as_str()),
            ("draw_name", self.draw_name.as_str()),
        ]
    }
}

/// Outcome of a draw. `message` accompanies failures; `prize`, `target_angle`
/// and `history` accompany successes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct DrawResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub prize: Option<String>,
    #[serde(default)]
    pub target_angle: Option<f64>,
    #[serde(default)]
    pub history: Option<Vec<HistoryEntry>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct NewActivityRequest {
    #[validate(custom = "validate_activity_name")]
    pub activity_name: String,
    #[validate(custom = "validate_config_id")]
    pub config_id: String,
}

impl NewActivityRequest {
    pub fn new(activity_name: &str, config_id: Option<&str>) -> Self {
        Self {
            activity_name: activity_name.trim().to_string(),
            config_id: config_id.map(str::trim).unwrap_or_default().to_string(),
        }
    }
}

impl FormRequest for NewActivityRequest {
    const ENDPOINT: &'static str = NEW_ACTIVITY_ENDPOINT;
    type Response = ApiAck;

    fn form_pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("activity_name", self.activity_name.as_str()),
            ("config_id", self.config_id.as_str()),
        ]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeleteActivityRequest {
    pub activity_name: String,
}

impl FormRequest for DeleteActivityRequest {
    const ENDPOINT: &'static str = DELETE_ACTIVITY_ENDPOINT;
    type Response = ApiAck;

    fn form_pairs(&self) -> Vec<(&'static str, &str)> {
        vec![("activity_name", self.activity_name.as_str())]
    }
}

/// Plain `{success, message?}` reply used by the activity endpoints.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ApiAck {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
