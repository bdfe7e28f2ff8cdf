use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, Utc};

/// One timestamped piece of activity (a post or a comment).
///
/// `created_at` is wall-clock time in the server's local timezone; the
/// streak works on its calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityRecord {
    pub created_at: NaiveDateTime,
}

impl ActivityRecord {
    pub fn from_utc(created_at: DateTime<Utc>) -> Self {
        Self {
            created_at: created_at.with_timezone(&Local).naive_local(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.created_at.date()
    }
}

/// Length of the consecutive-day streak ending `today` or the day before.
///
/// `activity` must be sorted by `created_at` descending; it is not re-sorted.
/// Several records on one day count once. The walk stops at the first gap
/// and never looks further back for a longer run. A record dated after the
/// current cursor is out of order and is skipped.
pub fn compute_streak(activity: &[ActivityRecord], today: NaiveDate) -> u32 {
    let mut dates = activity.iter().map(ActivityRecord::date);

    let Some(latest) = dates.next() else {
        return 0;
    };
    if latest != today && latest != today - Duration::days(1) {
        return 0;
    }

    let mut streak = 1;
    let mut cursor = latest;
    for date in dates {
        if date >= cursor {
            continue;
        }
        if date == cursor - Duration::days(1) {
            streak += 1;
            cursor = date;
        } else {
            break;
        }
    }

    streak
}
