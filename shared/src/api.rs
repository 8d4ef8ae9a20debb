//! The backend contract consumed by the room list page.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{action::ApiCall, room::RoomInfo};

/// Failure of one backend call. `Display` is the raw text shown in alerts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx status.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// The body did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
    /// The request body could not be encoded.
    #[error("Serialize error: {0}")]
    Serialize(String),
    /// Input refused before any request was made.
    #[error("{0}")]
    Rejected(String),
    /// The backend answered with a non-zero `err_no`.
    #[error("err_no {code}: {message}")]
    Backend {
        /// `err_no`
        code: i64,
        /// `err_msg`
        message: String,
    },
}

/// Envelope returned by `PUT /config` and most mutating endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsResponse {
    /// Zero on success.
    pub err_no: i64,
    /// Error detail when `err_no` is non-zero.
    pub err_msg: String,
    /// Free-form payload, usually `"OK"`.
    pub data: serde_json::Value,
}

impl SettingsResponse {
    /// Whether the backend reported success.
    pub fn is_success(&self) -> bool {
        self.err_no == 0
    }
}

/// One entry of the `POST /lives` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoomRequest {
    /// Live page URL.
    pub url: String,
    /// Start listening right after adding.
    pub listen: bool,
}

impl NewRoomRequest {
    /// Validate and normalize user input: trims whitespace and defaults the
    /// scheme to `https://`.
    pub fn from_input(url: &str, listen: bool) -> Result<Self, ApiError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ApiError::Rejected("直播间地址不能为空".to_string()));
        }
        let url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };
        Ok(Self {
            url,
            listen,
        })
    }
}

/// One entry of a recorded-files directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEntry {
    /// Directory rather than file.
    pub is_folder: bool,
    /// Base name.
    pub name: String,
    /// Modification time, Unix seconds.
    pub last_modified: i64,
    /// Size in bytes; zero for folders.
    pub size: i64,
}

impl FileEntry {
    /// Size in human units, or empty for folders.
    pub fn display_size(&self) -> String {
        if self.is_folder {
            return String::new();
        }
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
        let mut value = self.size.max(0) as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        if unit == 0 {
            format!("{} {}", self.size.max(0), UNITS[0])
        } else {
            format!("{value:.1} {}", UNITS[unit])
        }
    }
}

/// Body of `GET /file/{path}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileListResponse {
    /// Directory entries.
    pub files: Vec<FileEntry>,
    /// Directory path relative to the output root.
    pub path: String,
}

impl FileListResponse {
    /// Folders first, then by name.
    pub fn sorted(mut self) -> Self {
        self.files
            .sort_by(|a, b| b.is_folder.cmp(&a.is_folder).then_with(|| a.name.cmp(&b.name)));
        self
    }
}

/// Relative API path listing the recorded files of one streamer.
pub fn file_api_path(platform: &str, name: &str) -> String {
    format!("/file/{}/{}", urlencoding::encode(platform), urlencoding::encode(name))
}

/// Backend used by the room list page.
///
/// Futures are not `Send`: the browser client runs on the UI thread.
#[async_trait(?Send)]
pub trait RoomApi {
    /// `getRoomList`
    async fn get_room_list(&self) -> Result<Vec<RoomInfo>, ApiError>;
    /// `startRecord`
    async fn start_record(&self, room_id: &str) -> Result<(), ApiError>;
    /// `stopRecord`
    async fn stop_record(&self, room_id: &str) -> Result<(), ApiError>;
    /// `startPush`
    async fn start_push(&self, room_id: &str) -> Result<(), ApiError>;
    /// `stopPush`
    async fn stop_push(&self, room_id: &str) -> Result<(), ApiError>;
    /// `deleteRoom`
    async fn delete_room(&self, room_id: &str) -> Result<(), ApiError>;
    /// Add rooms by URL; returns the rooms the backend created.
    async fn add_rooms(&self, rooms: &[NewRoomRequest]) -> Result<Vec<RoomInfo>, ApiError>;
    /// `saveSettings`, awaited by the caller.
    async fn save_settings(&self) -> Result<SettingsResponse, ApiError>;
    /// `saveSettingsInBackground`: starts the save and returns at once.
    fn save_settings_in_background(&self);

    /// Run the call chosen for a row action.
    async fn invoke(&self, call: ApiCall, room_id: &str) -> Result<(), ApiError> {
        match call {
            ApiCall::StartRecord => self.start_record(room_id).await,
            ApiCall::StopRecord => self.stop_record(room_id).await,
            ApiCall::StartPush => self.start_push(room_id).await,
            ApiCall::StopPush => self.stop_push(room_id).await,
            ApiCall::DeleteRoom => self.delete_room(room_id).await,
        }
    }
}
