pub mod booking_form;
pub mod booking_modal;
pub mod calendar;
pub mod service_card;
pub mod time_slot_grid;

pub use booking_modal::BookingModal;
pub use service_card::ServiceCard;
