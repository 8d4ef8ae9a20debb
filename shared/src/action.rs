//! Per-row actions: which API call a button maps to, the wording around it,
//! and the in-flight bookkeeping that keeps double clicks from firing twice.

use std::{collections::HashSet, fmt::Display};

use crate::room::RoomRow;

/// Mutating buttons in the actions column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Start or stop recording.
    ToggleRecord,
    /// Start or stop pushing.
    TogglePush,
    /// Remove the room from the backend.
    Delete,
}

impl ActionKind {
    /// Button text for `row`.
    pub fn button_label(self, row: &RoomRow) -> &'static str {
        match self {
            Self::ToggleRecord if row.record => "关闭录制",
            Self::ToggleRecord => "开启录制",
            Self::TogglePush if row.push => "关闭推流",
            Self::TogglePush => "开启推流",
            Self::Delete => "删除",
        }
    }
}

/// Backend calls addressed by room id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiCall {
    /// `startRecord`
    StartRecord,
    /// `stopRecord`
    StopRecord,
    /// `startPush`
    StartPush,
    /// `stopPush`
    StopPush,
    /// `deleteRoom`
    DeleteRoom,
}

impl ApiCall {
    /// Human readable name used in prompts and alerts.
    pub fn name(self) -> &'static str {
        match self {
            Self::StartRecord => "开启录制",
            Self::StopRecord => "关闭录制",
            Self::StartPush => "开启推流",
            Self::StopPush => "关闭推流",
            Self::DeleteRoom => "删除直播间",
        }
    }
}

/// A button press resolved against the row it was pressed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomAction {
    /// Room the call is addressed to.
    pub room_id: String,
    /// Which button was pressed.
    pub kind: ActionKind,
    /// Call chosen from the row's current desired state.
    pub call: ApiCall,
}

impl RoomAction {
    /// Pick the call for `kind`: a channel that is requested gets stopped,
    /// otherwise started.
    pub fn resolve(row: &RoomRow, kind: ActionKind) -> Self {
        let call = match kind {
            ActionKind::ToggleRecord => {
                if row.record {
                    ApiCall::StopRecord
                } else {
                    ApiCall::StartRecord
                }
            },
            ActionKind::TogglePush => {
                if row.push {
                    ApiCall::StopPush
                } else {
                    ApiCall::StartPush
                }
            },
            ActionKind::Delete => ApiCall::DeleteRoom,
        };
        Self {
            room_id: row.room_id.clone(),
            kind,
            call,
        }
    }

    /// Question shown before the call is made.
    pub fn confirm_prompt(&self) -> String {
        match self.call {
            ApiCall::DeleteRoom => "确定删除当前直播间？".to_string(),
            call => format!("确定{}？", call.name()),
        }
    }

    /// Alert text for a failed call.
    pub fn failure_message(&self, err: &impl Display) -> String {
        format!("{}失败:\n{}", self.call.name(), err)
    }
}

/// Actions awaiting a backend response, keyed by room and button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InflightSet(HashSet<(String, ActionKind)>);

impl InflightSet {
    /// Claim the slot for `room_id`/`kind`. Returns `false` if it is taken.
    pub fn try_begin(&mut self, room_id: &str, kind: ActionKind) -> bool {
        self.0.insert((room_id.to_string(), kind))
    }

    /// Release the slot.
    pub fn finish(&mut self, room_id: &str, kind: ActionKind) {
        self.0.remove(&(room_id.to_string(), kind));
    }

    /// Whether the slot is taken.
    pub fn contains(&self, room_id: &str, kind: ActionKind) -> bool {
        self.0.contains(&(room_id.to_string(), kind))
    }

    /// Whether nothing is in flight.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{RoomInfo, RoomRow};

    fn row(record: bool, push: bool) -> RoomRow {
        RoomRow::from_info(RoomInfo {
            id: "room-1".to_string(),
            record,
            push,
            ..RoomInfo::default()
        })
    }

    #[test]
    fn toggle_record_starts_when_not_requested() {
        let action = RoomAction::resolve(&row(false, false), ActionKind::ToggleRecord);
        assert_eq!(action.call, ApiCall::StartRecord);
        assert_eq!(action.room_id, "room-1");
        assert_eq!(action.confirm_prompt(), "确定开启录制？");
    }

    #[test]
    fn toggle_record_stops_when_requested() {
        let action = RoomAction::resolve(&row(true, false), ActionKind::ToggleRecord);
        assert_eq!(action.call, ApiCall::StopRecord);
        assert_eq!(action.confirm_prompt(), "确定关闭录制？");
        assert_eq!(ActionKind::ToggleRecord.button_label(&row(true, false)), "关闭录制");
    }

    #[test]
    fn toggle_push_is_symmetric() {
        assert_eq!(
            RoomAction::resolve(&row(false, true), ActionKind::TogglePush).call,
            ApiCall::StopPush
        );
        assert_eq!(
            RoomAction::resolve(&row(true, false), ActionKind::TogglePush).call,
            ApiCall::StartPush
        );
        assert_eq!(ActionKind::TogglePush.button_label(&row(false, false)), "开启推流");
    }

    #[test]
    fn delete_has_fixed_wording() {
        let action = RoomAction::resolve(&row(true, true), ActionKind::Delete);
        assert_eq!(action.call, ApiCall::DeleteRoom);
        assert_eq!(action.confirm_prompt(), "确定删除当前直播间？");
        assert_eq!(action.failure_message(&"boom"), "删除直播间失败:\nboom");
    }

    #[test]
    fn inflight_slot_rejects_duplicates_until_finished() {
        let mut inflight = InflightSet::default();
        assert!(inflight.try_begin("a", ActionKind::ToggleRecord));
        assert!(!inflight.try_begin("a", ActionKind::ToggleRecord));
        assert!(inflight.try_begin("a", ActionKind::TogglePush));
        assert!(inflight.try_begin("b", ActionKind::ToggleRecord));
        assert!(inflight.contains("b", ActionKind::ToggleRecord));
        inflight.finish("a", ActionKind::ToggleRecord);
        assert!(!inflight.contains("a", ActionKind::ToggleRecord));
        assert!(inflight.try_begin("a", ActionKind::ToggleRecord));
    }
}
