use serde::{Deserialize, Serialize};

/// Deployment-level settings for the booking widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfig {
    /// Studio name shown in the composed confirmation message header.
    pub studio_name: String,
    /// Destination number for the messaging deep link (country code + number).
    pub whatsapp_number: String,
    /// First bookable hour of the day (inclusive).
    pub opening_hour: u32,
    /// Hour the studio closes; slots stop before this hour.
    pub closing_hour: u32,
    pub slot_interval_minutes: u32,
    /// Minimum trimmed length accepted for the client name.
    pub min_name_length: usize,
    /// Value substituted when the notes field is left blank.
    pub notes_placeholder: String,
    /// How long the presentation layer keeps the modal mounted after a
    /// close, so the exit transition can play. Has no effect on state.
    pub close_delay_ms: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            studio_name: "Studio Gaby Xavier".to_string(),
            whatsapp_number: "5511973119019".to_string(),
            opening_hour: 9,
            closing_hour: 19,
            slot_interval_minutes: 30,
            min_name_length: 3,
            notes_placeholder: "Nenhuma observação".to_string(),
            close_delay_ms: 300,
        }
    }
}
