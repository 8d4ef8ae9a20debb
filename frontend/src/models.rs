// 重新导出shared crate的数据模型
#[cfg(feature = "mock")]
use std::cell::RefCell;

#[cfg(feature = "mock")]
use live_console_shared::{ApiError, FileEntry, FileListResponse, NewRoomRequest, RoomInfo};

// =============== Mock 数据 ===============

#[cfg(feature = "mock")]
thread_local! {
    static MOCK_ROOMS: RefCell<Vec<RoomInfo>> = RefCell::new(seed_rooms());
}

/// 当前 mock 直播间列表。
#[cfg(feature = "mock")]
pub fn mock_rooms() -> Vec<RoomInfo> {
    MOCK_ROOMS.with(|rooms| rooms.borrow().clone())
}

/// 模拟开启/关闭录制与推流。
#[cfg(feature = "mock")]
pub fn mock_room_action(room_id: &str, action: &str) -> Result<(), ApiError> {
    MOCK_ROOMS.with(|rooms| {
        let mut rooms = rooms.borrow_mut();
        let room = rooms
            .iter_mut()
            .find(|room| room.id == room_id)
            .ok_or_else(|| ApiError::Backend {
                code: 404,
                message: format!("live id: {} 找不到", room_id),
            })?;
        match action {
            "start" => {
                room.record = true;
                room.listen = true;
            },
            "stop" => {
                room.record = false;
                room.recording = false;
            },
            "rtmp/start" => room.push = true,
            "rtmp/stop" => {
                room.push = false;
                room.pushing = false;
            },
            other => {
                return Err(ApiError::Backend {
                    code: 400,
                    message: format!("无效操作：{}", other),
                })
            },
        }
        Ok(())
    })
}

/// 模拟删除直播间。
#[cfg(feature = "mock")]
pub fn mock_delete_room(room_id: &str) -> Result<(), ApiError> {
    MOCK_ROOMS.with(|rooms| {
        let mut rooms = rooms.borrow_mut();
        let before = rooms.len();
        rooms.retain(|room| room.id != room_id);
        if rooms.len() == before {
            return Err(ApiError::Backend {
                code: 404,
                message: format!("live id: {} 找不到", room_id),
            });
        }
        Ok(())
    })
}

/// 模拟添加直播间，已存在的地址会被忽略。
#[cfg(feature = "mock")]
pub fn mock_add_rooms(requests: &[NewRoomRequest]) -> Vec<RoomInfo> {
    MOCK_ROOMS.with(|rooms| {
        let mut rooms = rooms.borrow_mut();
        let mut added = Vec::new();
        for request in requests {
            if rooms.iter().any(|room| room.live_url == request.url) {
                continue;
            }
            let id = format!("mock-{}", rooms.len() + 1);
            let room = RoomInfo {
                id: id.clone(),
                host_name: format!("主播 {}", rooms.len() + 1),
                room_name: "新直播间".to_string(),
                live_url: request.url.clone(),
                platform_cn_name: "哔哩哔哩".to_string(),
                listen: request.listen,
                listening: request.listen,
                ..RoomInfo::default()
            };
            rooms.push(room.clone());
            added.push(room);
        }
        added
    })
}

/// 模拟录制文件目录。
#[cfg(feature = "mock")]
pub fn mock_file_list(platform: &str, name: &str) -> FileListResponse {
    let files = (1..=4)
        .map(|i| FileEntry {
            is_folder: false,
            name: format!("[2026-10-{:02} 20-00-00][{}][直播录像].flv", i, name),
            last_modified: 1_792_000_000 + i * 86_400,
            size: i * 734_003_200,
        })
        .chain(std::iter::once(FileEntry {
            is_folder: true,
            name: "clips".to_string(),
            last_modified: 1_792_000_000,
            size: 0,
        }))
        .collect();
    FileListResponse {
        files,
        path: format!("{}/{}", platform, name),
    }
}

// 内部函数：初始 mock 直播间
#[cfg(feature = "mock")]
fn seed_rooms() -> Vec<RoomInfo> {
    let base = |id: &str, host: &str, title: &str, platform: &str| RoomInfo {
        id: id.to_string(),
        host_name: host.to_string(),
        room_name: title.to_string(),
        live_url: format!("https://live.example.com/{}", id),
        platform_cn_name: platform.to_string(),
        listen: true,
        listening: true,
        ..RoomInfo::default()
    };
    vec![
        RoomInfo {
            record: true,
            recording: true,
            ..base("1030", "Alice", "深夜编程", "哔哩哔哩")
        },
        RoomInfo {
            record: true,
            push: true,
            pushing: true,
            ..base("493", "Bob", "周末游戏", "斗鱼")
        },
        RoomInfo {
            record: true,
            push: true,
            initializing: true,
            ..base("7734", "Carol", "音乐电台", "虎牙")
        },
        base("2718", "Dave", "读书会", "抖音"),
    ]
}
