use js_sys::Date;
use shared::DaySelection;

/// Today's civil date from the browser clock.
pub fn current_day() -> DaySelection {
    let now = Date::new_0();
    DaySelection {
        year: now.get_full_year() as i32,
        // JavaScript months are 0-indexed
        month: now.get_month() + 1,
        day: now.get_date(),
    }
}
