//! Table layout selection and column sorting.

use std::cmp::Ordering;

use crate::room::RoomRow;

/// Viewports at most this wide get the narrow layout.
pub const NARROW_LAYOUT_MAX_WIDTH: f64 = 768.0;

/// Table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// 主播名称
    Name,
    /// 主播名称, rendered as a link to the live page (narrow layout only).
    NameWithRoomLink,
    /// 直播间名称
    Room,
    /// 直播平台
    Platform,
    /// 录制状态
    RecordStatus,
    /// 推流状态
    PushStatus,
    /// 操作
    Actions,
}

impl Column {
    /// Header text.
    pub fn title(self) -> &'static str {
        match self {
            Self::Name | Self::NameWithRoomLink => "主播名称",
            Self::Room => "直播间名称",
            Self::Platform => "直播平台",
            Self::RecordStatus => "录制状态",
            Self::PushStatus => "推流状态",
            Self::Actions => "操作",
        }
    }

    /// Sort key when the header is clickable.
    pub fn sort_key(self) -> Option<SortKey> {
        match self {
            Self::Name => Some(SortKey::Name),
            Self::Platform => Some(SortKey::Platform),
            _ => None,
        }
    }

    /// Whether the column holds row data rather than action buttons.
    pub fn is_data(self) -> bool {
        self != Self::Actions
    }
}

/// Table row density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSize {
    /// Regular padding.
    Default,
    /// Compact padding.
    Middle,
}

const WIDE_COLUMNS: [Column; 6] = [
    Column::Name,
    Column::Room,
    Column::Platform,
    Column::RecordStatus,
    Column::PushStatus,
    Column::Actions,
];

const NARROW_COLUMNS: [Column; 3] =
    [Column::NameWithRoomLink, Column::RecordStatus, Column::Actions];

/// Which column set to render. Chosen once when the page is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Desktop column set.
    Wide,
    /// Phone column set.
    Narrow,
}

impl Layout {
    /// Pick the layout for a viewport width in CSS pixels.
    pub fn for_viewport_width(width: f64) -> Self {
        if width > NARROW_LAYOUT_MAX_WIDTH {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    /// Columns in render order.
    pub fn columns(self) -> &'static [Column] {
        match self {
            Self::Wide => &WIDE_COLUMNS,
            Self::Narrow => &NARROW_COLUMNS,
        }
    }

    /// Row density.
    pub fn row_size(self) -> RowSize {
        match self {
            Self::Wide => RowSize::Default,
            Self::Narrow => RowSize::Middle,
        }
    }
}

/// Sortable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Streamer name.
    Name,
    /// Platform name.
    Platform,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// A to Z.
    Ascending,
    /// Z to A.
    Descending,
}

/// Current header sort. `None` keeps the backend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState(pub Option<(SortKey, SortOrder)>);

impl SortState {
    /// State after clicking the header of `key`: ascending, then descending,
    /// then back to unsorted.
    pub fn toggle(self, key: SortKey) -> Self {
        match self.0 {
            Some((current, SortOrder::Ascending)) if current == key => {
                Self(Some((key, SortOrder::Descending)))
            },
            Some((current, SortOrder::Descending)) if current == key => Self(None),
            _ => Self(Some((key, SortOrder::Ascending))),
        }
    }

    /// Direction applied to `key`, if it is the active sort.
    pub fn order_of(self, key: SortKey) -> Option<SortOrder> {
        self.0
            .and_then(|(current, order)| (current == key).then_some(order))
    }

    /// Sorted copy of `rows`, comparing the sort field with `collate`. The
    /// input order is left alone.
    ///
    /// `str::cmp` sorts by code point, which does not match how a browser
    /// collates Chinese names. The page passes `localeCompare` instead.
    pub fn apply<F>(self, rows: &[RoomRow], collate: F) -> Vec<RoomRow>
    where
        F: Fn(&str, &str) -> Ordering,
    {
        let mut sorted = rows.to_vec();
        if let Some((key, order)) = self.0 {
            sorted.sort_by(|a, b| {
                let ordering = collate(sort_field(a, key), sort_field(b, key));
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }
        sorted
    }
}

fn sort_field(row: &RoomRow, key: SortKey) -> &str {
    match key {
        SortKey::Name => &row.name,
        SortKey::Platform => &row.address,
    }
}
