//! The bookable time labels for a single day.

use crate::config::BookingConfig;

/// Every offerable slot, in order. The catalog is the same for every date:
/// the widget does not model existing bookings or per-day availability.
pub fn slot_catalog(config: &BookingConfig) -> Vec<String> {
    let mut slots = Vec::new();
    for hour in config.opening_hour..config.closing_hour {
        let mut minute = 0;
        while minute < 60 {
            slots.push(format!("{:02}:{:02}", hour, minute));
            minute += config.slot_interval_minutes;
        }
    }
    slots
}

/// Whether `time` is one of the offerable labels.
pub fn is_catalog_slot(config: &BookingConfig, time: &str) -> bool {
    slot_catalog(config).iter().any(|slot| slot == time)
}
