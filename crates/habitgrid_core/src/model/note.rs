//! Free-text reflection attached to one day.

use crate::date::DateKey;
use serde::{Deserialize, Serialize};

/// Day note. At most one exists per date and its text is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayNote {
    pub date: DateKey,
    pub note: String,
}
