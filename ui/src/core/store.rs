//! Fixed engagement datasets backing the dashboard.
//!
//! The store is built once and never mutated. `MetricStore::shipped()` holds the
//! literal mock values; `MetricStore::new` runs the optional schema check for
//! callers assembling their own datasets (tests, previews).

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Process-wide shipped store. Everything on screen reads from here.
pub static METRIC_STORE: Lazy<MetricStore> = Lazy::new(MetricStore::shipped);

/// Daily total hours watched, one point per weekday.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyWatchPoint {
    pub date: String,
    pub hours: f64,
}

/// A title in the weekly ranking. Order is the caller's ranking; never re-sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowEntry {
    pub title: String,
    pub hours: f64,
}

/// Share of viewing per device class, in percent (0–100).
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceShare {
    pub device: String,
    pub percentage: f64,
}

/// Per-day session statistics. `completion_rate` is a fraction in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStat {
    pub day: String,
    pub avg_minutes: f64,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset `{0}` is empty")]
    Empty(&'static str),

    #[error("watch hours for `{label}` must be a finite non-negative number (got {value})")]
    InvalidHours { label: String, value: f64 },

    #[error("average session minutes for `{day}` must be positive (got {value})")]
    InvalidMinutes { day: String, value: f64 },

    #[error("completion rate for `{day}` must be within [0, 1] (got {value})")]
    InvalidCompletionRate { day: String, value: f64 },

    #[error("device share for `{device}` must be within [0, 100] (got {value})")]
    InvalidPercentage { device: String, value: f64 },

    #[error("duplicate show title `{0}`")]
    DuplicateTitle(String),

    #[error("duplicate device label `{0}`")]
    DuplicateDevice(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricStore {
    daily_watch_time: Vec<DailyWatchPoint>,
    top_shows: Vec<ShowEntry>,
    device_usage: Vec<DeviceShare>,
    session_stats: Vec<SessionStat>,
    estimated_active_users: u64,
}

impl MetricStore {
    /// Build a store from caller-supplied datasets, running the schema check.
    pub fn new(
        daily_watch_time: Vec<DailyWatchPoint>,
        top_shows: Vec<ShowEntry>,
        device_usage: Vec<DeviceShare>,
        session_stats: Vec<SessionStat>,
        estimated_active_users: u64,
    ) -> Result<Self, DatasetError> {
        let store = Self {
            daily_watch_time,
            top_shows,
            device_usage,
            session_stats,
            estimated_active_users,
        };
        store.validate()?;
        Ok(store)
    }

    /// The mock week shown on the dashboard. Values are trusted literals.
    pub fn shipped() -> Self {
        let daily_watch_time = [
            ("Mon", 1200.0),
            ("Tue", 1450.0),
            ("Wed", 1600.0),
            ("Thu", 1550.0),
            ("Fri", 1900.0),
            ("Sat", 2200.0),
            ("Sun", 2100.0),
        ]
        .into_iter()
        .map(|(date, hours)| DailyWatchPoint {
            date: date.to_string(),
            hours,
        })
        .collect();

        let top_shows = [
            ("Midnight Code", 850.0),
            ("Data Dreams", 720.0),
            ("Cloud City", 610.0),
            ("Bug Hunters", 540.0),
            ("Fintech Files", 480.0),
        ]
        .into_iter()
        .map(|(title, hours)| ShowEntry {
            title: title.to_string(),
            hours,
        })
        .collect();

        let device_usage = [("TV", 45.0), ("Mobile", 30.0), ("Tablet", 10.0), ("Web", 15.0)]
            .into_iter()
            .map(|(device, percentage)| DeviceShare {
                device: device.to_string(),
                percentage,
            })
            .collect();

        let session_stats = [
            ("Mon", 38.0, 0.62),
            ("Tue", 41.0, 0.66),
            ("Wed", 43.0, 0.69),
            ("Thu", 40.0, 0.64),
            ("Fri", 48.0, 0.72),
            ("Sat", 52.0, 0.76),
            ("Sun", 50.0, 0.74),
        ]
        .into_iter()
        .map(|(day, avg_minutes, completion_rate)| SessionStat {
            day: day.to_string(),
            avg_minutes,
            completion_rate,
        })
        .collect();

        Self {
            daily_watch_time,
            top_shows,
            device_usage,
            session_stats,
            estimated_active_users: 48_000,
        }
    }

    pub fn daily_watch_time(&self) -> &[DailyWatchPoint] {
        &self.daily_watch_time
    }

    pub fn top_shows(&self) -> &[ShowEntry] {
        &self.top_shows
    }

    pub fn device_usage(&self) -> &[DeviceShare] {
        &self.device_usage
    }

    pub fn session_stats(&self) -> &[SessionStat] {
        &self.session_stats
    }

    pub fn estimated_active_users(&self) -> u64 {
        self.estimated_active_users
    }

    /// Schema check. Device percentages are not required to sum to 100.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.daily_watch_time.is_empty() {
            return Err(DatasetError::Empty("daily_watch_time"));
        }
        if self.top_shows.is_empty() {
            return Err(DatasetError::Empty("top_shows"));
        }
        if self.device_usage.is_empty() {
            return Err(DatasetError::Empty("device_usage"));
        }
        if self.session_stats.is_empty() {
            return Err(DatasetError::Empty("session_stats"));
        }

        for point in &self.daily_watch_time {
            check_hours(&point.date, point.hours)?;
        }

        let mut titles = HashSet::new();
        for show in &self.top_shows {
            check_hours(&show.title, show.hours)?;
            if !titles.insert(show.title.as_str()) {
                return Err(DatasetError::DuplicateTitle(show.title.clone()));
            }
        }

        let mut devices = HashSet::new();
        for share in &self.device_usage {
            if !(0.0..=100.0).contains(&share.percentage) {
                return Err(DatasetError::InvalidPercentage {
                    device: share.device.clone(),
                    value: share.percentage,
                });
            }
            if !devices.insert(share.device.as_str()) {
                return Err(DatasetError::DuplicateDevice(share.device.clone()));
            }
        }

        for stat in &self.session_stats {
            if !(stat.avg_minutes.is_finite() && stat.avg_minutes > 0.0) {
                return Err(DatasetError::InvalidMinutes {
                    day: stat.day.clone(),
                    value: stat.avg_minutes,
                });
            }
            if !(0.0..=1.0).contains(&stat.completion_rate) {
                return Err(DatasetError::InvalidCompletionRate {
                    day: stat.day.clone(),
                    value: stat.completion_rate,
                });
            }
        }

        Ok(())
    }
}

fn check_hours(label: &str, hours: f64) -> Result<(), DatasetError> {
    if hours.is_finite() && hours >= 0.0 {
        Ok(())
    } else {
        Err(DatasetError::InvalidHours {
            label: label.to_string(),
            value: hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped_parts() -> (
        Vec<DailyWatchPoint>,
        Vec<ShowEntry>,
        Vec<DeviceShare>,
        Vec<SessionStat>,
    ) {
        let store = MetricStore::shipped();
        (
            store.daily_watch_time().to_vec(),
            store.top_shows().to_vec(),
            store.device_usage().to_vec(),
            store.session_stats().to_vec(),
        )
    }

    #[test]
    fn shipped_store_passes_schema_check() {
        assert_eq!(MetricStore::shipped().validate(), Ok(()));
    }

    #[test]
    fn shipped_weekdays_are_in_calendar_order() {
        let store = MetricStore::shipped();
        let days: Vec<&str> = store
            .daily_watch_time()
            .iter()
            .map(|p| p.date.as_str())
            .collect();
        assert_eq!(days, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(store.session_stats().len(), 7);
    }

    #[test]
    fn top_shows_keep_supplied_order() {
        let store = MetricStore::shipped();
        assert_eq!(store.top_shows()[0].title, "Midnight Code");
        assert_eq!(store.top_shows()[4].title, "Fintech Files");
    }

    #[test]
    fn rejects_duplicate_titles() {
        let (daily, mut shows, devices, sessions) = shipped_parts();
        shows.push(ShowEntry {
            title: "Cloud City".into(),
            hours: 10.0,
        });
        let err = MetricStore::new(daily, shows, devices, sessions, 1).unwrap_err();
        assert_eq!(err, DatasetError::DuplicateTitle("Cloud City".into()));
    }

    #[test]
    fn rejects_out_of_range_completion() {
        let (daily, shows, devices, mut sessions) = shipped_parts();
        sessions[2].completion_rate = 1.2;
        let err = MetricStore::new(daily, shows, devices, sessions, 1).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidCompletionRate { ref day, .. } if day == "Wed"));
    }

    #[test]
    fn rejects_empty_dataset() {
        let (_, shows, devices, sessions) = shipped_parts();
        let err = MetricStore::new(Vec::new(), shows, devices, sessions, 1).unwrap_err();
        assert_eq!(err, DatasetError::Empty("daily_watch_time"));
    }

    #[test]
    fn device_shares_need_not_sum_to_hundred() {
        let (daily, shows, mut devices, sessions) = shipped_parts();
        devices[0].percentage = 5.0;
        assert!(MetricStore::new(daily, shows, devices, sessions, 1).is_ok());
    }

    #[test]
    fn rejects_negative_hours() {
        let (mut daily, shows, devices, sessions) = shipped_parts();
        daily[0].hours = -1.0;
        let err = MetricStore::new(daily, shows, devices, sessions, 1).unwrap_err();
        assert!(err.to_string().contains("Mon"));
    }
}
