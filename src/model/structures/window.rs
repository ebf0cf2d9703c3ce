use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::model::structures::window_kind::WindowKind;

/// Half-open `[start, end)` interval for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub kind: WindowKind,
    pub offset: u32,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>
}

impl Window {
    pub fn contains(&self, timestamp: &DateTime<FixedOffset>) -> bool {
        self.start <= *timestamp && *timestamp < self.end
    }
}
