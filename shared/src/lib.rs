//! Room list logic shared between the live console frontend and its tests.
//!
//! Everything here is platform neutral: the browser build drives it from Yew
//! hooks, the native build drives it from `tokio` tests.

pub mod action;
pub mod api;
pub mod controller;
pub mod layout;
pub mod lifecycle;
pub mod poller;
pub mod room;
pub mod status;

pub use action::{ActionKind, ApiCall, InflightSet, RoomAction};
pub use api::{ApiError, FileEntry, FileListResponse, NewRoomRequest, RoomApi, SettingsResponse};
pub use controller::{DispatchOutcome, RoomListController, RoomListView};
pub use layout::{Column, Layout, RowSize, SortKey, SortOrder, SortState};
pub use lifecycle::Liveness;
pub use room::{map_rooms, RoomInfo, RoomLink, RoomRow};
pub use status::{ChannelKind, ChannelStatus, StatusTag, TagColor};
