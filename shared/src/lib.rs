//! Domain types and interaction logic for the studio booking widget,
//! shared by every rendering surface.

pub mod booking;
pub mod calendar;
pub mod config;
pub mod flow;
pub mod message;
pub mod slots;

pub use booking::{is_masked_phone, mask_phone_input, BookingError, BookingFields, BookingRequest};
pub use calendar::{
    days_in_month, is_leap_year, month_name, CalendarCell, CalendarCursor, CellKind, DaySelection,
    MonthGrid, GRID_CELLS,
};
pub use config::BookingConfig;
pub use flow::{BookingFlow, Effect, FlowEvent, FlowState, BOOKING_CONFIRMED_NOTICE};
pub use message::{
    compose_message, format_phone, format_weekdayed_date, price_for, service_catalog,
};
pub use slots::{is_catalog_slot, slot_catalog};
