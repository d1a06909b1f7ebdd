use gloo::net::http::Request;
use serde::Serialize;
use shared::{compose_message, price_for, BookingConfig, BookingRequest};

/// How a completed booking leaves the page. One transport is picked per
/// deployment; the widget only sees the `dispatch` contract.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryMethod {
    /// Hand the composed message to WhatsApp in a new browsing context.
    WhatsAppLink,
    /// POST the booking fields as JSON to a form-submission endpoint.
    FormEndpoint { endpoint: String },
    /// POST structured fields to a transactional-email HTTP API.
    EmailDispatch {
        endpoint: String,
        service_id: String,
        template_id: String,
        to_email: String,
    },
}

/// Structured fields for the transactional-email transport.
#[derive(Debug, Serialize)]
struct EmailDispatchRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    template_params: EmailTemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct EmailTemplateParams<'a> {
    to_email: &'a str,
    from_name: &'a str,
    service: &'a str,
    date: String,
    time: &'a str,
    phone: &'a str,
    notes: &'a str,
    price: &'a str,
}

/// Delivery collaborator for completed bookings.
#[derive(Clone, PartialEq)]
pub struct DeliveryClient {
    method: DeliveryMethod,
    config: BookingConfig,
}

impl DeliveryClient {
    /// Create a client with the deployment default transport.
    pub fn new() -> Self {
        Self::with_method(DeliveryMethod::WhatsAppLink)
    }

    pub fn with_method(method: DeliveryMethod) -> Self {
        Self {
            method,
            config: BookingConfig::default(),
        }
    }

    /// Hand the booking to the configured transport. Exactly one attempt;
    /// the widget re-enables its submit control on either outcome.
    pub async fn dispatch(&self, request: &BookingRequest) -> Result<(), String> {
        match &self.method {
            DeliveryMethod::WhatsAppLink => self.open_whatsapp(request),
            DeliveryMethod::FormEndpoint { endpoint } => {
                Self::post_form(endpoint, request).await
            }
            DeliveryMethod::EmailDispatch {
                endpoint,
                service_id,
                template_id,
                to_email,
            } => Self::send_email(endpoint, service_id, template_id, to_email, request).await,
        }
    }

    fn open_whatsapp(&self, request: &BookingRequest) -> Result<(), String> {
        let text = compose_message(request, &self.config);
        let url = format!(
            "https://api.whatsapp.com/send?phone={}&text={}",
            self.config.whatsapp_number, text
        );

        let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
        match window.open_with_url_and_target(&url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err("Popup blocked by the browser".to_string()),
            Err(_) => Err("Failed to open the messaging link".to_string()),
        }
    }

    async fn post_form(endpoint: &str, request: &BookingRequest) -> Result<(), String> {
        match Request::post(endpoint)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) if response.ok() => Ok(()),
            Ok(response) => Err(format!("Server error {}", response.status())),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    async fn send_email(
        endpoint: &str,
        service_id: &str,
        template_id: &str,
        to_email: &str,
        request: &BookingRequest,
    ) -> Result<(), String> {
        let body = EmailDispatchRequest {
            service_id,
            template_id,
            template_params: EmailTemplateParams {
                to_email,
                from_name: &request.client_name,
                service: &request.service,
                date: request.date.display(),
                time: &request.time,
                phone: &request.client_phone,
                notes: &request.notes,
                price: price_for(&request.service),
            },
        };

        match Request::post(endpoint)
            .json(&body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) if response.ok() => Ok(()),
            Ok(response) => Err(format!("Server error {}", response.status())),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for DeliveryClient {
    fn default() -> Self {
        Self::new()
    }
}
