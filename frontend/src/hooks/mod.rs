pub mod use_booking_flow;

pub use use_booking_flow::{use_booking_flow, BookingWidgetActions, BookingWidgetState};
