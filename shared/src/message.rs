//! Formatting of a completed booking into the outbound confirmation text.
//!
//! Everything here is pure: the delivery collaborator decides where the
//! composed message actually goes.

use chrono::{Datelike, NaiveDate};

use crate::booking::BookingRequest;
use crate::config::BookingConfig;

/// Weekday names indexed by days-from-Sunday.
const WEEKDAYS: [&str; 7] = [
    "Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado",
];

/// Known services and their display prices.
const SERVICE_PRICES: [(&str, &str); 3] = [
    ("Design de Sobrancelhas", "R$ 50,00"),
    ("Peeling Facial", "R$ 80,00"),
    ("Massagem Rejuvenescedora", "R$ 100,00"),
];

/// The services offered on the page, with display prices.
pub fn service_catalog() -> Vec<(&'static str, &'static str)> {
    SERVICE_PRICES.to_vec()
}

/// Display price for a known service; unknown services yield an empty
/// string, not an error.
pub fn price_for(service: &str) -> &'static str {
    SERVICE_PRICES
        .iter()
        .find(|(name, _)| *name == service)
        .map(|(_, price)| *price)
        .unwrap_or("")
}

/// Strip everything but digits; exactly 11 of them format as
/// `(DD) DDDDD-DDDD`, anything else comes back unchanged.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 11 {
        format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])
    } else {
        raw.to_string()
    }
}

/// Parse a `DD/MM/YYYY` display date.
fn parse_display_date(date: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let day = parts[0].parse::<u32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let year = parts[2].parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `"25/12/2024"` becomes `"Quarta, 25/12/2024"`. Unparseable input comes
/// back unchanged.
pub fn format_weekdayed_date(date: &str) -> String {
    match parse_display_date(date) {
        Some(parsed) => {
            let weekday = WEEKDAYS[parsed.weekday().num_days_from_sunday() as usize];
            format!("{}, {}", weekday, date)
        }
        None => date.to_string(),
    }
}

/// Render the confirmation text and percent-encode it for a URL query
/// parameter. The notes section is omitted entirely when the notes are
/// blank or still the placeholder.
pub fn compose_message(request: &BookingRequest, config: &BookingConfig) -> String {
    let date = format_weekdayed_date(&request.date.display());
    let phone = format_phone(&request.client_phone);
    let price = price_for(&request.service);

    let notes = request.notes.trim();
    let notes_section = if notes.is_empty() || notes == config.notes_placeholder {
        String::new()
    } else {
        format!("\n📝 *OBSERVAÇÕES:*\n{}", notes)
    };

    let text = format!(
        "\n✨ *NOVO AGENDAMENTO - {}* ✨\n\n\
         📅 *Data:* {}\n\
         ⏰ *Horário:* {}\n\
         💆‍♀️ *Serviço:* {}\n\
         💰 *Valor:* {}\n\n\
         👤 *DADOS DO CLIENTE:*\n\
         📋 Nome: {}\n\
         📱 Telefone: {}\n\
         {}\n\n\
         -------------------\n\
         Aguardando sua confirmação!\n",
        config.studio_name.to_uppercase(),
        date,
        request.time,
        request.service,
        price,
        request.client_name,
        phone,
        notes_section,
    );

    urlencoding::encode(&text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DaySelection;

    fn sample_request(notes: &str) -> BookingRequest {
        BookingRequest {
            service: "Peeling Facial".to_string(),
            client_name: "Maria Silva".to_string(),
            client_phone: "(11) 91234-5678".to_string(),
            date: DaySelection {
                year: 2024,
                month: 12,
                day: 25,
            },
            time: "14:30".to_string(),
            notes: notes.to_string(),
        }
    }

    fn decoded_message(notes: &str) -> String {
        let encoded = compose_message(&sample_request(notes), &BookingConfig::default());
        urlencoding::decode(&encoded).unwrap().into_owned()
    }

    #[test]
    fn test_format_phone_eleven_digits() {
        assert_eq!(format_phone("11999998888"), "(11) 99999-8888");
        assert_eq!(format_phone("(11) 99999-8888"), "(11) 99999-8888");
    }

    #[test]
    fn test_format_phone_other_lengths_unchanged() {
        assert_eq!(format_phone("119999988"), "119999988");
        assert_eq!(format_phone("551199999888877"), "551199999888877");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_format_weekdayed_date() {
        assert_eq!(format_weekdayed_date("25/12/2024"), "Quarta, 25/12/2024");
        assert_eq!(format_weekdayed_date("01/06/2025"), "Domingo, 01/06/2025");
    }

    #[test]
    fn test_format_weekdayed_date_fallback() {
        assert_eq!(format_weekdayed_date("2024-12-25"), "2024-12-25");
        assert_eq!(format_weekdayed_date("31/02/2024"), "31/02/2024");
    }

    #[test]
    fn test_price_for() {
        assert_eq!(price_for("Design de Sobrancelhas"), "R$ 50,00");
        assert_eq!(price_for("Peeling Facial"), "R$ 80,00");
        assert_eq!(price_for("Massagem Rejuvenescedora"), "R$ 100,00");
        assert_eq!(price_for("Manicure"), "");
    }

    #[test]
    fn test_compose_message_contains_booking_details() {
        let message = decoded_message("");
        assert!(message.contains("NOVO AGENDAMENTO - STUDIO GABY XAVIER"));
        assert!(message.contains("Quarta, 25/12/2024"));
        assert!(message.contains("14:30"));
        assert!(message.contains("Peeling Facial"));
        assert!(message.contains("R$ 80,00"));
        assert!(message.contains("Maria Silva"));
        assert!(message.contains("(11) 91234-5678"));
    }

    #[test]
    fn test_compose_message_omits_blank_or_placeholder_notes() {
        assert!(!decoded_message("").contains("OBSERVAÇÕES"));
        assert!(!decoded_message("Nenhuma observação").contains("OBSERVAÇÕES"));
    }

    #[test]
    fn test_compose_message_includes_real_notes_verbatim() {
        let message = decoded_message("Alergia a cosméticos");
        assert!(message.contains("OBSERVAÇÕES"));
        assert!(message.contains("Alergia a cosméticos"));
    }

    #[test]
    fn test_compose_message_is_url_safe() {
        let encoded = compose_message(&sample_request("traz & leva?"), &BookingConfig::default());
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('\n'));
    }
}
