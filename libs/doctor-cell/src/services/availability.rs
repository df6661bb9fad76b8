use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::models::{AvailabilityError, BookedSlot, DayAvailability};

/// Canonical `YYYY-MM-DD` key for a zero-based month.
pub fn date_key(year: i32, month0: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month0 + 1, day)
}

pub fn key_for(date: NaiveDate) -> String {
    date_key(date.year(), date.month0(), date.day())
}

/// A day can be picked when it offers at least one slot and is not before
/// `today`. Only the date is compared, so today stays selectable all day.
pub fn is_selectable(date: NaiveDate, slots: &[String], today: NaiveDate) -> bool {
    !slots.is_empty() && date >= today
}

/// Bookable times per calendar date. Dates without an entry have no slots.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl AvailabilityTable {
    pub fn new<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<T>)>,
        K: Into<String>,
        T: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, times)| {
                let mut seen = HashSet::new();
                let times: Vec<String> = times
                    .into_iter()
                    .map(Into::into)
                    .filter(|t: &String| seen.insert(t.clone()))
                    .collect();
                (key.into(), times)
            })
            .collect();

        Self { entries }
    }

    pub fn clinic_default() -> Self {
        Self::new([
            ("2024-12-27", vec!["09:00", "10:30", "14:00", "15:30"]),
            ("2024-12-28", vec!["09:30", "11:00", "15:00", "16:30"]),
            ("2024-12-30", vec!["10:00", "11:30", "14:30", "16:00"]),
            ("2024-12-31", vec!["09:00", "10:30", "14:00"]),
            ("2025-01-02", vec!["09:30", "11:00", "14:30", "16:00"]),
            ("2025-01-03", vec!["10:00", "11:30", "15:00", "16:30"]),
        ])
    }

    pub fn slots(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Availability Resolution over the clinic table. The table is shared by
/// every practitioner; confirmed bookings are tracked per practitioner and
/// removed from what `resolve` returns.
#[derive(Debug, Default)]
pub struct AvailabilityService {
    table: AvailabilityTable,
    booked: RwLock<HashSet<BookedSlot>>,
}

impl AvailabilityService {
    pub fn new(table: AvailabilityTable) -> Self {
        Self {
            table,
            booked: RwLock::new(HashSet::new()),
        }
    }

    pub fn table(&self) -> &AvailabilityTable {
        &self.table
    }

    /// Open slots for a date key, in table order. `None` resolves the
    /// unscoped table (no practitioner chosen yet).
    pub async fn resolve(&self, practitioner_id: Option<u32>, key: &str) -> Vec<String> {
        let slots = self.table.slots(key);
        let Some(practitioner_id) = practitioner_id else {
            return slots.to_vec();
        };

        let booked = self.booked.read().await;
        slots
            .iter()
            .filter(|time| {
                !booked.contains(&BookedSlot {
                    practitioner_id,
                    date_key: key.to_string(),
                    time: time.to_string(),
                })
            })
            .cloned()
            .collect()
    }

    pub async fn day(
        &self,
        practitioner_id: Option<u32>,
        date: NaiveDate,
        today: NaiveDate,
    ) -> DayAvailability {
        let date_key = key_for(date);
        let slots = self.resolve(practitioner_id, &date_key).await;
        debug!("{} has {} open slot(s)", date_key, slots.len());

        DayAvailability {
            selectable: is_selectable(date, &slots, today),
            past: date < today,
            date_key,
            slots,
        }
    }

    #[instrument(skip(self))]
    pub async fn reserve(
        &self,
        practitioner_id: u32,
        key: &str,
        time: &str,
    ) -> Result<(), AvailabilityError> {
        if !self.table.slots(key).iter().any(|t| t == time) {
            warn!("Rejected reservation for a slot the table does not offer");
            return Err(AvailabilityError::SlotNotOffered {
                date_key: key.to_string(),
                time: time.to_string(),
            });
        }

        let slot = BookedSlot {
            practitioner_id,
            date_key: key.to_string(),
            time: time.to_string(),
        };

        let mut booked = self.booked.write().await;
        if !booked.insert(slot) {
            warn!("Slot already booked");
            return Err(AvailabilityError::SlotTaken {
                date_key: key.to_string(),
                time: time.to_string(),
            });
        }

        info!("Reserved slot");
        Ok(())
    }
}
