//! Per-channel status and the tags rendered in the status columns.

use serde::{Deserialize, Serialize};

/// The two independently controlled channels of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelKind {
    /// Persisting the stream to local storage.
    Record,
    /// Re-streaming to an RTMP destination.
    Push,
}

/// Desired state and observed state of one channel folded into one value.
///
/// | desired | observed | status     |
/// |---------|----------|------------|
/// | off     | off      | `Idle`     |
/// | on      | off      | `Starting` |
/// | on      | on       | `Active`   |
/// | off     | on       | `Stopping` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelStatus {
    /// Not requested and not running.
    Idle,
    /// Requested; the backend is monitoring but not yet running.
    Starting,
    /// Requested and running.
    Active,
    /// No longer requested but the backend still reports it running.
    Stopping,
}

impl ChannelStatus {
    /// Build the status from the backend's desired/observed flag pair.
    pub fn from_flags(desired: bool, observed: bool) -> Self {
        match (desired, observed) {
            (false, false) => Self::Idle,
            (true, false) => Self::Starting,
            (true, true) => Self::Active,
            (false, true) => Self::Stopping,
        }
    }
}

/// A label rendered as a colored tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTag {
    /// 已停止
    Stopped,
    /// 监控中
    Monitoring,
    /// 录制中
    Recording,
    /// 推流中
    Pushing,
    /// 初始化
    Initializing,
}

impl StatusTag {
    /// Text shown inside the tag.
    pub fn label(self) -> &'static str {
        match self {
            Self::Stopped => "已停止",
            Self::Monitoring => "监控中",
            Self::Recording => "录制中",
            Self::Pushing => "推流中",
            Self::Initializing => "初始化",
        }
    }

    /// Tag color, looked up by label.
    pub fn color(self) -> TagColor {
        TagColor::for_label(self.label())
    }

    /// Primary tag for a channel; an observed running state wins over the
    /// desired state.
    pub fn for_channel(kind: ChannelKind, status: ChannelStatus) -> Self {
        match status {
            ChannelStatus::Idle => Self::Stopped,
            ChannelStatus::Starting => Self::Monitoring,
            ChannelStatus::Active | ChannelStatus::Stopping => match kind {
                ChannelKind::Record => Self::Recording,
                ChannelKind::Push => Self::Pushing,
            },
        }
    }
}

/// Tag palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagColor {
    /// Stopped channels.
    Grey,
    /// Monitoring, and the fallback for unknown labels.
    Green,
    /// Recording or pushing.
    Red,
    /// Initializing.
    Orange,
}

impl TagColor {
    /// Map a label to its color. Unknown labels are green.
    pub fn for_label(label: &str) -> Self {
        match label {
            "已停止" => Self::Grey,
            "监控中" => Self::Green,
            "录制中" | "推流中" => Self::Red,
            "初始化" => Self::Orange,
            _ => Self::Green,
        }
    }

    /// CSS color keyword.
    pub fn css(self) -> &'static str {
        match self {
            Self::Grey => "grey",
            Self::Green => "green",
            Self::Red => "red",
            Self::Orange => "orange",
        }
    }
}

/// Tags for one channel: the primary tag, plus `初始化` while the backend is
/// still initializing the room.
pub fn derive_tags(kind: ChannelKind, status: ChannelStatus, initializing: bool) -> Vec<StatusTag> {
    let mut tags = vec![StatusTag::for_channel(kind, status)];
    if initializing {
        tags.push(StatusTag::Initializing);
    }
    tags
}
