use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::stock::max_quantity;
use crate::error::{ChartError, ChartResult};

/// Timestamp layout of inventory log rows.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

/// Item names paired with their current quantities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemSeries {
    item_names: Vec<String>,
    quantities: Vec<f64>,
}

impl ItemSeries {
    pub fn new(item_names: Vec<String>, quantities: Vec<f64>) -> ChartResult<Self> {
        if item_names.len() != quantities.len() {
            return Err(ChartError::SeriesLengthMismatch {
                series: "item series",
                left: item_names.len(),
                right: quantities.len(),
            });
        }
        if let Some(bad) = quantities.iter().find(|q| !q.is_finite() || **q < 0.0) {
            return Err(ChartError::InvalidData(format!(
                "item quantities must be finite and >= 0, got {bad}"
            )));
        }
        Ok(Self {
            item_names,
            quantities,
        })
    }

    #[must_use]
    pub fn item_names(&self) -> &[String] {
        &self.item_names
    }

    #[must_use]
    pub fn quantities(&self) -> &[f64] {
        &self.quantities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Largest quantity, floored at 1.
    #[must_use]
    pub fn max_quantity(&self) -> f64 {
        max_quantity(&self.quantities)
    }

    /// Each quantity as a percentage of the largest one.
    #[must_use]
    pub fn stock_percentages(&self) -> Vec<f64> {
        let max = self.max_quantity();
        self.quantities.iter().map(|q| q / max * 100.0).collect()
    }
}

/// Date labels paired with the number of items moved on that day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivitySeries {
    dates: Vec<String>,
    daily_counts: Vec<f64>,
}

impl ActivitySeries {
    pub fn new(dates: Vec<String>, daily_counts: Vec<f64>) -> ChartResult<Self> {
        if dates.len() != daily_counts.len() {
            return Err(ChartError::SeriesLengthMismatch {
                series: "activity series",
                left: dates.len(),
                right: daily_counts.len(),
            });
        }
        if daily_counts.iter().any(|c| !c.is_finite()) {
            return Err(ChartError::InvalidData(
                "daily counts must be finite".to_owned(),
            ));
        }
        Ok(Self {
            dates,
            daily_counts,
        })
    }

    /// Folds inventory log rows into per-day movement totals, oldest day first.
    ///
    /// Added and removed quantities both count as activity.
    pub fn from_log_entries<'a, I>(entries: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = &'a LogEntry>,
    {
        let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for entry in entries {
            let day = entry.day()?;
            *per_day.entry(day).or_insert(0.0) += f64::from(entry.quantity);
        }

        let (dates, daily_counts) = per_day
            .into_iter()
            .map(|(day, count)| (day.format(DATE_LABEL_FORMAT).to_string(), count))
            .unzip();
        Ok(Self {
            dates,
            daily_counts,
        })
    }

    #[must_use]
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    #[must_use]
    pub fn daily_counts(&self) -> &[f64] {
        &self.daily_counts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.daily_counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.daily_counts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogAction {
    Added,
    Removed,
}

/// One row of the inventory movement log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub barcode: String,
    pub action: LogAction,
    pub quantity: u32,
    /// Formatted with [`LOG_TIMESTAMP_FORMAT`].
    pub time: String,
}

impl LogEntry {
    #[must_use]
    pub fn new(
        barcode: impl Into<String>,
        action: LogAction,
        quantity: u32,
        time: impl Into<String>,
    ) -> Self {
        Self {
            barcode: barcode.into(),
            action,
            quantity,
            time: time.into(),
        }
    }

    fn day(&self) -> ChartResult<NaiveDate> {
        NaiveDateTime::parse_from_str(&self.time, LOG_TIMESTAMP_FORMAT)
            .map(|timestamp| timestamp.date())
            .map_err(|e| {
                ChartError::InvalidData(format!(
                    "invalid log timestamp `{}` for `{}`: {e}",
                    self.time, self.barcode
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{ActivitySeries, ItemSeries, LogAction, LogEntry};
    use crate::error::ChartError;

    #[test]
    fn item_series_rejects_mismatched_lengths() {
        let err = ItemSeries::new(vec!["bolts".to_owned()], vec![1.0, 2.0])
            .expect_err("mismatch must fail");
        assert!(matches!(
            err,
            ChartError::SeriesLengthMismatch {
                left: 1,
                right: 2,
                ..
            }
        ));
    }

    #[test]
    fn item_series_rejects_negative_quantity() {
        let err = ItemSeries::new(vec!["nuts".to_owned()], vec![-1.0])
            .expect_err("negative quantity must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn stock_percentages_are_relative_to_largest_item() {
        let items = ItemSeries::new(
            vec!["a".to_owned(), "b".to_owned()],
            vec![25.0, 100.0],
        )
        .expect("valid items");
        assert_eq!(items.stock_percentages(), vec![25.0, 100.0]);
        assert!(ItemSeries::default().stock_percentages().is_empty());
    }

    #[test]
    fn log_entries_are_grouped_per_day_in_order() {
        let entries = vec![
            LogEntry::new("111", LogAction::Added, 5, "2024-03-02 09:15:00"),
            LogEntry::new("222", LogAction::Removed, 2, "2024-03-01 18:00:00"),
            LogEntry::new("111", LogAction::Removed, 1, "2024-03-02 23:59:59"),
        ];
        let activity = ActivitySeries::from_log_entries(&entries).expect("aggregate");
        assert_eq!(activity.dates(), ["2024-03-01", "2024-03-02"]);
        assert_eq!(activity.daily_counts(), [2.0, 6.0]);
    }

    #[test]
    fn log_entries_reject_malformed_timestamps() {
        let entries = vec![LogEntry::new("111", LogAction::Added, 1, "yesterday")];
        let err = ActivitySeries::from_log_entries(&entries).expect_err("bad timestamp");
        assert!(format!("{err}").contains("invalid log timestamp"));
    }
}
