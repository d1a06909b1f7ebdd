//! Calendar month math for the booking widget.
//!
//! The widget renders a fixed 6x7 grid: leading days borrowed from the
//! previous month, the displayed month itself, then trailing days of the
//! next month. Only cells belonging to the displayed month are selectable.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Cell count of the fixed 6x7 grid, independent of month length.
pub const GRID_CELLS: usize = 42;

/// Month and year currently displayed by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCursor {
    pub year: i32,
    /// 1 = January .. 12 = December.
    pub month: u32,
}

impl CalendarCursor {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Move the displayed month by `delta` (-1 or +1), wrapping the year
    /// across the December/January boundary.
    pub fn advance(&mut self, delta: i32) {
        if delta >= 0 {
            let (month, year) = next_month(self.month, self.year);
            self.month = month;
            self.year = year;
        } else {
            let (month, year) = previous_month(self.month, self.year);
            self.month = month;
            self.year = year;
        }
    }

    /// Title text for the calendar header, e.g. "Março 2025".
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// A concrete date picked on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySelection {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DaySelection {
    /// Display form used across the form and the outbound message.
    pub fn display(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Which month a grid cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Trailing day of the previous month, shown as leading padding.
    PaddingBefore,
    /// Day of the displayed month.
    MonthDay,
    /// Leading day of the next month, shown as trailing padding.
    PaddingAfter,
}

/// A single cell of the 42-cell grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub day: u32,
    pub kind: CellKind,
    pub is_today: bool,
}

impl CalendarCell {
    /// Padding cells can never become a selection.
    pub fn selectable(&self) -> bool {
        matches!(self.kind, CellKind::MonthDay)
    }
}

/// The rendered month: always exactly [`GRID_CELLS`] cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Build the grid for the cursor's month. `today` flags the matching
    /// current-month cell; padding cells are never flagged.
    pub fn for_month(cursor: CalendarCursor, today: DaySelection) -> Self {
        let mut cells = Vec::with_capacity(GRID_CELLS);

        let leading = first_weekday_of_month(cursor.year, cursor.month) as usize;
        let (prev_month, prev_year) = previous_month(cursor.month, cursor.year);
        let prev_total = days_in_month(prev_year, prev_month);

        for i in 0..leading {
            cells.push(CalendarCell {
                day: prev_total - leading as u32 + i as u32 + 1,
                kind: CellKind::PaddingBefore,
                is_today: false,
            });
        }

        for day in 1..=days_in_month(cursor.year, cursor.month) {
            let is_today = today.year == cursor.year
                && today.month == cursor.month
                && today.day == day;
            cells.push(CalendarCell {
                day,
                kind: CellKind::MonthDay,
                is_today,
            });
        }

        let remaining = GRID_CELLS - cells.len();
        for day in 1..=remaining {
            cells.push(CalendarCell {
                day: day as u32,
                kind: CellKind::PaddingAfter,
                is_today: false,
            });
        }

        Self {
            year: cursor.year,
            month: cursor.month,
            cells,
        }
    }
}

/// Navigate to the previous month.
pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month == 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

/// Navigate to the next month.
pub fn next_month(month: u32, year: i32) -> (u32, i32) {
    if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    }
}

/// Days in a month, accounting for leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Weekday of the 1st of the month, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Month name as shown in the calendar title.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Janeiro",
        2 => "Fevereiro",
        3 => "Março",
        4 => "Abril",
        5 => "Maio",
        6 => "Junho",
        7 => "Julho",
        8 => "Agosto",
        9 => "Setembro",
        10 => "Outubro",
        11 => "Novembro",
        12 => "Dezembro",
        _ => "Janeiro",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_for(year: i32, month: u32) -> MonthGrid {
        let today = DaySelection {
            year: 2025,
            month: 6,
            day: 15,
        };
        MonthGrid::for_month(CalendarCursor::new(year, month), today)
    }

    #[test]
    fn test_grid_always_has_42_cells() {
        for month in 1..=12 {
            assert_eq!(grid_for(2024, month).cells.len(), GRID_CELLS);
            assert_eq!(grid_for(2025, month).cells.len(), GRID_CELLS);
        }
    }

    #[test]
    fn test_grid_current_month_days_in_order() {
        let grid = grid_for(2025, 6);
        let month_days: Vec<u32> = grid
            .cells
            .iter()
            .filter(|cell| cell.kind == CellKind::MonthDay)
            .map(|cell| cell.day)
            .collect();
        assert_eq!(month_days, (1..=30).collect::<Vec<u32>>());
    }

    #[test]
    fn test_grid_padding_counts() {
        // July 2025 starts on a Tuesday: 2 leading cells, 31 days, 9 trailing.
        let grid = grid_for(2025, 7);
        let leading = grid
            .cells
            .iter()
            .take_while(|cell| cell.kind == CellKind::PaddingBefore)
            .count();
        let trailing = grid
            .cells
            .iter()
            .rev()
            .take_while(|cell| cell.kind == CellKind::PaddingAfter)
            .count();
        assert_eq!(leading, 2);
        assert_eq!(trailing, 42 - 2 - 31);

        // Leading padding continues the previous month's numbering.
        assert_eq!(grid.cells[0].day, 29);
        assert_eq!(grid.cells[1].day, 30);
    }

    #[test]
    fn test_grid_month_starting_on_sunday_has_no_leading_padding() {
        // June 2025 starts on a Sunday.
        let grid = grid_for(2025, 6);
        assert_eq!(grid.cells[0].kind, CellKind::MonthDay);
        assert_eq!(grid.cells[0].day, 1);
    }

    #[test]
    fn test_grid_flags_today_only_in_matching_month() {
        let today = DaySelection {
            year: 2025,
            month: 6,
            day: 15,
        };
        let current = MonthGrid::for_month(CalendarCursor::new(2025, 6), today);
        let flagged: Vec<&CalendarCell> = current
            .cells
            .iter()
            .filter(|cell| cell.is_today)
            .collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].day, 15);
        assert_eq!(flagged[0].kind, CellKind::MonthDay);

        let other = MonthGrid::for_month(CalendarCursor::new(2025, 7), today);
        assert!(other.cells.iter().all(|cell| !cell.is_today));
    }

    #[test]
    fn test_advance_twelve_months_returns_to_same_month_next_year() {
        let mut cursor = CalendarCursor::new(2024, 5);
        for _ in 0..12 {
            cursor.advance(1);
        }
        assert_eq!(cursor, CalendarCursor::new(2025, 5));

        for _ in 0..12 {
            cursor.advance(-1);
        }
        assert_eq!(cursor, CalendarCursor::new(2024, 5));
    }

    #[test]
    fn test_advance_wraps_year_boundary() {
        let mut cursor = CalendarCursor::new(2024, 12);
        cursor.advance(1);
        assert_eq!(cursor, CalendarCursor::new(2025, 1));
        cursor.advance(-1);
        assert_eq!(cursor, CalendarCursor::new(2024, 12));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_first_weekday_of_month() {
        // December 2024 starts on a Sunday, July 2025 on a Tuesday.
        assert_eq!(first_weekday_of_month(2024, 12), 0);
        assert_eq!(first_weekday_of_month(2025, 7), 2);
    }

    #[test]
    fn test_cursor_title() {
        assert_eq!(CalendarCursor::new(2025, 3).title(), "Março 2025");
        assert_eq!(CalendarCursor::new(2024, 12).title(), "Dezembro 2024");
    }

    #[test]
    fn test_day_selection_display() {
        let selection = DaySelection {
            year: 2024,
            month: 12,
            day: 25,
        };
        assert_eq!(selection.display(), "25/12/2024");
    }
}
