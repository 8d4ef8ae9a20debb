//! Raw room records from the backend and the rows built from them.

use serde::{Deserialize, Serialize};

use crate::status::{derive_tags, ChannelKind, ChannelStatus, StatusTag};

/// One room as returned by `GET /lives`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomInfo {
    /// Backend identifier.
    pub id: String,
    /// Streamer display name.
    pub host_name: String,
    /// Room title.
    pub room_name: String,
    /// Link to the live page.
    pub live_url: String,
    /// Platform display name.
    pub platform_cn_name: String,
    /// Whether the backend should watch this room.
    pub listen: bool,
    /// Whether recording is requested.
    pub record: bool,
    /// Whether pushing is requested.
    pub push: bool,
    /// Whether a listener is attached.
    pub listening: bool,
    /// Whether a recorder is running.
    pub recording: bool,
    /// Whether a pusher is running.
    pub pushing: bool,
    /// Whether the room is still starting up.
    pub initializing: bool,
}

/// Room title with the link it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomLink {
    /// Text of the link.
    pub room_name: String,
    /// Target of the link.
    pub url: String,
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomRow {
    /// Render key. This is the backend id, so it survives reordering.
    pub key: String,
    /// Streamer display name.
    pub name: String,
    /// Room title and live page link.
    pub room: RoomLink,
    /// Platform display name.
    pub address: String,
    /// Tags of the record channel.
    pub record_tags: Vec<StatusTag>,
    /// Tags of the push channel.
    pub push_tags: Vec<StatusTag>,
    /// Record channel status.
    pub record_status: ChannelStatus,
    /// Push channel status.
    pub push_status: ChannelStatus,
    /// See [`RoomInfo::listen`].
    pub listen: bool,
    /// See [`RoomInfo::record`].
    pub record: bool,
    /// See [`RoomInfo::push`].
    pub push: bool,
    /// See [`RoomInfo::listening`].
    pub listening: bool,
    /// See [`RoomInfo::recording`].
    pub recording: bool,
    /// See [`RoomInfo::pushing`].
    pub pushing: bool,
    /// See [`RoomInfo::initializing`].
    pub initializing: bool,
    /// Identifier used to address API calls for this room.
    pub room_id: String,
}

impl RoomRow {
    /// Build the row for one fetched room.
    pub fn from_info(info: RoomInfo) -> Self {
        let record_status = ChannelStatus::from_flags(info.record, info.recording);
        let push_status = ChannelStatus::from_flags(info.push, info.pushing);
        Self {
            key: info.id.clone(),
            name: info.host_name,
            room: RoomLink {
                room_name: info.room_name,
                url: info.live_url,
            },
            address: info.platform_cn_name,
            record_tags: derive_tags(ChannelKind::Record, record_status, info.initializing),
            push_tags: derive_tags(ChannelKind::Push, push_status, info.initializing),
            record_status,
            push_status,
            listen: info.listen,
            record: info.record,
            push: info.push,
            listening: info.listening,
            recording: info.recording,
            pushing: info.pushing,
            initializing: info.initializing,
            room_id: info.id,
        }
    }
}

/// Map a fetched list into rows, preserving backend order.
pub fn map_rooms(rooms: Vec<RoomInfo>) -> Vec<RoomRow> {
    if rooms.is_empty() {
        return Vec::new();
    }
    rooms.into_iter().map(RoomRow::from_info).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str) -> RoomInfo {
        RoomInfo {
            id: id.to_string(),
            host_name: format!("host-{id}"),
            room_name: format!("room-{id}"),
            live_url: format!("https://live.example.com/{id}"),
            platform_cn_name: "哔哩哔哩".to_string(),
            ..RoomInfo::default()
        }
    }

    #[test]
    fn empty_list_maps_to_no_rows() {
        assert!(map_rooms(Vec::new()).is_empty());
        assert!(map_rooms(Vec::new()).is_empty());
    }

    #[test]
    fn monitoring_record_and_stopped_push() {
        let rows = map_rooms(vec![RoomInfo {
            record: true,
            ..sample("a")
        }]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record_tags, vec![StatusTag::Monitoring]);
        assert_eq!(rows[0].push_tags, vec![StatusTag::Stopped]);
    }

    #[test]
    fn rows_are_keyed_by_backend_id() {
        let first = map_rooms(vec![sample("a"), sample("b")]);
        let reordered = map_rooms(vec![sample("b"), sample("a")]);
        assert_eq!(first[0].key, "a");
        assert_eq!(reordered[1].key, "a");
        assert_eq!(reordered[0].key, "b");
    }

    #[test]
    fn display_fields_are_carried_over() {
        let row = RoomRow::from_info(sample("42"));
        assert_eq!(row.name, "host-42");
        assert_eq!(row.room.room_name, "room-42");
        assert_eq!(row.room.url, "https://live.example.com/42");
        assert_eq!(row.address, "哔哩哔哩");
        assert_eq!(row.room_id, "42");
    }

    #[test]
    fn missing_fields_deserialize_as_defaults() {
        let info: RoomInfo =
            serde_json::from_str(r#"{"id":"x","host_name":"h","recording":true}"#)
                .expect("parse room");
        assert!(info.recording);
        assert!(!info.record);
        assert!(info.room_name.is_empty());
    }
}
