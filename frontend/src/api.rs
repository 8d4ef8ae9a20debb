use async_trait::async_trait;
#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, Response};
#[cfg(not(feature = "mock"))]
use js_sys::Date;
use live_console_shared::{
    ApiError, FileListResponse, NewRoomRequest, RoomApi, RoomInfo, SettingsResponse,
};
#[cfg(not(feature = "mock"))]
use live_console_shared::api::file_api_path;

#[cfg(not(feature = "mock"))]
use crate::config::api_url;
#[cfg(feature = "mock")]
use crate::models;

/// `RoomApi` backed by the recorder's HTTP API (or the in-memory mock).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HttpRoomApi;

#[async_trait(?Send)]
impl RoomApi for HttpRoomApi {
    async fn get_room_list(&self) -> Result<Vec<RoomInfo>, ApiError> {
        fetch_rooms().await
    }

    async fn start_record(&self, room_id: &str) -> Result<(), ApiError> {
        room_action(room_id, "start").await
    }

    async fn stop_record(&self, room_id: &str) -> Result<(), ApiError> {
        room_action(room_id, "stop").await
    }

    async fn start_push(&self, room_id: &str) -> Result<(), ApiError> {
        room_action(room_id, "rtmp/start").await
    }

    async fn stop_push(&self, room_id: &str) -> Result<(), ApiError> {
        room_action(room_id, "rtmp/stop").await
    }

    async fn delete_room(&self, room_id: &str) -> Result<(), ApiError> {
        delete_room(room_id).await
    }

    async fn add_rooms(&self, rooms: &[NewRoomRequest]) -> Result<Vec<RoomInfo>, ApiError> {
        add_rooms(rooms).await
    }

    async fn save_settings(&self) -> Result<SettingsResponse, ApiError> {
        save_settings().await
    }

    fn save_settings_in_background(&self) {
        wasm_bindgen_futures::spawn_local(async {
            if let Err(err) = save_settings().await {
                web_sys::console::error_1(
                    &format!("Background settings save failed: {}", err).into(),
                );
            }
        });
    }
}

/// 获取全部直播间
pub async fn fetch_rooms() -> Result<Vec<RoomInfo>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_rooms());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}?_ts={}", api_url("/lives"), Date::now() as u64);
        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))
    }
}

/// `GET /lives/{id}/{action}`, action being `start`, `stop`, `rtmp/start` or
/// `rtmp/stop`.
async fn room_action(room_id: &str, action: &str) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_room_action(room_id, action);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url(&format!("/lives/{}/{}", urlencoding::encode(room_id), action));
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }
}

/// 删除直播间
pub async fn delete_room(room_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_delete_room(room_id);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url(&format!("/lives/{}", urlencoding::encode(room_id)));
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        let body: SettingsResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
        if !body.is_success() {
            return Err(ApiError::Backend {
                code: body.err_no,
                message: body.err_msg,
            });
        }
        Ok(())
    }
}

/// 添加直播间
pub async fn add_rooms(rooms: &[NewRoomRequest]) -> Result<Vec<RoomInfo>, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_add_rooms(rooms));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url("/lives");
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&rooms)
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))
    }
}

/// 保存设置至配置文件
pub async fn save_settings() -> Result<SettingsResponse, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(SettingsResponse::default());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url("/config");
        let response = Request::put(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        // 400 still carries an `err_no` envelope the caller inspects.
        if !response.ok() && response.status() != 400 {
            return Err(ApiError::Http(response.status()));
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))
    }
}

/// 获取录制文件列表
pub async fn fetch_file_list(platform: &str, name: &str) -> Result<FileListResponse, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_file_list(platform, name).sorted());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = api_url(&file_api_path(platform, name));
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
        // Directory errors come back as 200 with an `err_msg` envelope.
        if let Ok(envelope) = serde_json::from_str::<SettingsResponse>(&text) {
            if !envelope.err_msg.is_empty() {
                return Err(ApiError::Backend {
                    code: envelope.err_no,
                    message: envelope.err_msg,
                });
            }
        }
        serde_json::from_str::<FileListResponse>(&text)
            .map(FileListResponse::sorted)
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Prefer the backend's `err_msg` over the bare status code.
#[cfg(not(feature = "mock"))]
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<SettingsResponse>().await {
        Ok(body) if !body.err_msg.is_empty() => ApiError::Backend {
            code: body.err_no,
            message: body.err_msg,
        },
        _ => ApiError::Http(status),
    }
}
