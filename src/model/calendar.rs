use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc, Weekday};

use crate::model::structures::{window::Window, window_kind::WindowKind};

/// Boundary math for every period in the system.
///
/// All day, week and season boundaries are computed in one reference timezone
/// so that "start of day" means the same instant everywhere.
#[derive(Debug, Clone)]
pub struct PeriodCalendar {
    timezone: FixedOffset,
    week_start: Weekday,
    // Sorted, no duplicates
    season_starts: Vec<NaiveDate>
}

impl Default for PeriodCalendar {
    fn default() -> Self {
        PeriodCalendar::new(Utc.fix(), Weekday::Mon, Vec::new())
    }
}

impl PeriodCalendar {
    pub fn new(timezone: FixedOffset, week_start: Weekday, mut season_starts: Vec<NaiveDate>) -> PeriodCalendar {
        season_starts.sort();
        season_starts.dedup();

        PeriodCalendar {
            timezone,
            week_start,
            season_starts
        }
    }

    pub fn timezone(&self) -> FixedOffset {
        self.timezone
    }

    pub fn local_date(&self, instant: &DateTime<FixedOffset>) -> NaiveDate {
        instant.with_timezone(&self.timezone).date_naive()
    }

    /// Midnight of `date` in the reference timezone, `None` outside chrono's range.
    pub fn local_midnight(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        let local = date.and_time(NaiveTime::MIN);
        let utc = local.checked_sub_signed(Duration::seconds(self.timezone.local_minus_utc() as i64))?;

        Some(self.timezone.from_utc_datetime(&utc))
    }

    pub fn start_of_day(&self, instant: &DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
        self.local_midnight(self.local_date(instant))
    }

    pub fn start_of_week(&self, instant: &DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
        let date = self.local_date(instant);
        let days_into_week =
            (date.weekday().num_days_from_monday() + 7 - self.week_start.num_days_from_monday()) % 7;

        self.local_midnight(date.checked_sub_signed(Duration::days(days_into_week as i64))?)
    }

    /// Resolves a period request into its window.
    ///
    /// Returns `None` when the period cannot be resolved: an empty season table,
    /// "now" before the first season, an offset reaching back past it, or an
    /// offset beyond the representable date range.
    pub fn window(&self, kind: WindowKind, offset: u32, now: &DateTime<FixedOffset>) -> Option<Window> {
        let (start, end) = match kind {
            WindowKind::Day => {
                let start = self.start_of_day(&now.checked_sub_signed(Duration::days(offset as i64))?)?;
                (start, start.checked_add_signed(Duration::days(1))?)
            }
            WindowKind::Week => {
                let start = self.start_of_week(&now.checked_sub_signed(Duration::weeks(offset as i64))?)?;
                (start, start.checked_add_signed(Duration::weeks(1))?)
            }
            WindowKind::Season => self.season_bounds(offset, now)?
        };

        Some(Window {
            kind,
            offset,
            start,
            end
        })
    }

    fn season_bounds(
        &self,
        offset: u32,
        now: &DateTime<FixedOffset>
    ) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        let today = self.local_date(now);
        let current = self.season_starts.iter().rposition(|start| *start <= today)?;
        let index = current.checked_sub(offset as usize)?;

        let start = self.local_midnight(self.season_starts[index])?;
        // The running season closes with the current day unless its successor is already scheduled
        let end = match self.season_starts.get(index + 1) {
            Some(next) => self.local_midnight(*next)?,
            None => self.start_of_day(now)?.checked_add_signed(Duration::days(1))?
        };

        Some((start, end))
    }

    /// The leaderboard day representing a window: its last day, clamped to today.
    pub fn snapshot_day(&self, window: &Window, now: &DateTime<FixedOffset>) -> NaiveDate {
        let last_day = self.local_date(&(window.end - Duration::nanoseconds(1)));

        last_day.min(self.local_date(now))
    }
}
