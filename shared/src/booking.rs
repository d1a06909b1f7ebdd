//! The booking aggregate and the field validation applied at submission.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::DaySelection;
use crate::config::BookingConfig;

/// Raw values captured from the contact form at submission time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingFields {
    pub service: String,
    pub name: String,
    pub phone: String,
    pub notes: String,
}

/// A validated booking, ready for the delivery collaborator. Never
/// persisted; dropped once dispatch finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub service: String,
    pub client_name: String,
    pub client_phone: String,
    pub date: DaySelection,
    pub time: String,
    pub notes: String,
}

/// Everything that can keep a submission from going out. `Display` carries
/// the message shown to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Por favor, selecione uma data e horário.")]
    MissingSchedule,
    #[error("Por favor, insira seu nome completo")]
    NameTooShort,
    #[error("Por favor, insira um número de telefone válido")]
    InvalidPhone,
    #[error("Por favor, preencha todos os campos obrigatórios")]
    MissingRequiredField,
    #[error("Ocorreu um erro ao processar seu agendamento. Por favor, tente novamente.")]
    DeliveryFailed,
}

impl BookingRequest {
    /// Validate the form fields against the schedule picked in the widget.
    /// Checks run in the order the client sees the fields reported.
    pub fn from_fields(
        fields: &BookingFields,
        date: DaySelection,
        time: String,
        config: &BookingConfig,
    ) -> Result<Self, BookingError> {
        let name = fields.name.trim();
        if name.chars().count() < config.min_name_length {
            return Err(BookingError::NameTooShort);
        }

        let phone = fields.phone.trim();
        if !is_masked_phone(phone) {
            return Err(BookingError::InvalidPhone);
        }

        let service = fields.service.trim();
        if service.is_empty() {
            return Err(BookingError::MissingRequiredField);
        }

        let notes = fields.notes.trim();
        Ok(Self {
            service: service.to_string(),
            client_name: name.to_string(),
            client_phone: phone.to_string(),
            date,
            time,
            notes: if notes.is_empty() {
                config.notes_placeholder.clone()
            } else {
                notes.to_string()
            },
        })
    }
}

/// Accepts exactly the shape the masked input produces: `(DD) DDDDD-DDDD`.
pub fn is_masked_phone(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    if bytes.len() != 15 {
        return false;
    }
    if bytes[0] != b'(' || bytes[3] != b')' || bytes[4] != b' ' || bytes[10] != b'-' {
        return false;
    }
    let digit_positions = [1, 2, 5, 6, 7, 8, 9, 11, 12, 13, 14];
    digit_positions
        .iter()
        .all(|&index| bytes[index].is_ascii_digit())
}

/// Reformat the phone field as digits are typed, truncating past the 11
/// national digits: `(DD) DDDDD-DDDD`.
pub fn mask_phone_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(11)
        .collect();
    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}
