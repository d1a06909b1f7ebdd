//! The booking session state machine.
//!
//! One widget instance owns one `BookingFlow`. UI events go through
//! [`BookingFlow::apply`], which mutates the state and returns the side
//! effects the presentation layer must carry out. Panel visibility and the
//! rendered grid are derived from the state itself; the effects cover the
//! discrete actions (dispatching, feedback, form resets) that a re-render
//! cannot express.

use serde::{Deserialize, Serialize};

use crate::booking::{BookingError, BookingFields, BookingRequest};
use crate::calendar::{days_in_month, CalendarCursor, DaySelection, MonthGrid};
use crate::config::BookingConfig;
use crate::slots::{is_catalog_slot, slot_catalog};

/// Notice shown once the delivery collaborator accepts the booking.
pub const BOOKING_CONFIRMED_NOTICE: &str =
    "Agendamento realizado com sucesso! Você será conectado ao WhatsApp para confirmar os detalhes.";

/// Which stage of the booking cycle the widget is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowState {
    Closed,
    CalendarOpen,
    TimeOpen,
    FormOpen,
    Submitting,
}

/// A user-input (or dispatch-completion) event fed into the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    /// A booking call-to-action was activated, optionally carrying the
    /// service it advertises. `today` re-derives the displayed month.
    Open {
        service: Option<String>,
        today: DaySelection,
    },
    PrevMonth,
    NextMonth,
    DaySelected(u32),
    SlotSelected(String),
    /// Discard only the form panel; date and time selections survive.
    BackToCalendar,
    /// Close button, backdrop click, or programmatic cancel.
    Close,
    Submit(BookingFields),
    DispatchSucceeded,
    DispatchFailed,
}

/// Side effects the presentation layer executes after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PrefillService(String),
    ShowError(String),
    ShowNotice(String),
    ClearFeedback,
    /// Hand the request to the delivery collaborator; exactly one of
    /// `DispatchSucceeded`/`DispatchFailed` must come back.
    Dispatch(BookingRequest),
    ResetForm,
}

/// Transient state of one open-modal cycle. Nothing here survives a close.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingFlow {
    config: BookingConfig,
    state: FlowState,
    cursor: CalendarCursor,
    today: DaySelection,
    selected_date: Option<DaySelection>,
    selected_time: Option<String>,
}

impl BookingFlow {
    pub fn new(config: BookingConfig, today: DaySelection) -> Self {
        Self {
            cursor: CalendarCursor::new(today.year, today.month),
            state: FlowState::Closed,
            today,
            selected_date: None,
            selected_time: None,
            config,
        }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != FlowState::Closed
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn selected_date(&self) -> Option<DaySelection> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.selected_time.as_deref()
    }

    /// The 42-cell grid for the displayed month.
    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::for_month(self.cursor, self.today)
    }

    /// The offerable time labels; identical for every selected day.
    pub fn slots(&self) -> Vec<String> {
        slot_catalog(&self.config)
    }

    /// Feed one event through the machine. Events that are not meaningful
    /// in the current state are no-ops and return no effects.
    pub fn apply(&mut self, event: FlowEvent) -> Vec<Effect> {
        match event {
            FlowEvent::Open { service, today } => self.open(service, today),
            FlowEvent::PrevMonth if self.accepts_selection() => {
                self.cursor.advance(-1);
                Vec::new()
            }
            FlowEvent::NextMonth if self.accepts_selection() => {
                self.cursor.advance(1);
                Vec::new()
            }
            FlowEvent::DaySelected(day) if self.accepts_selection() => self.select_day(day),
            FlowEvent::SlotSelected(time) if self.accepts_selection() => self.select_slot(time),
            FlowEvent::BackToCalendar if self.state == FlowState::FormOpen => {
                self.state = FlowState::TimeOpen;
                vec![Effect::ClearFeedback]
            }
            FlowEvent::Close if self.is_open() => self.close(),
            FlowEvent::Submit(fields) if self.accepts_selection() => self.submit(fields),
            FlowEvent::DispatchSucceeded if self.state == FlowState::Submitting => {
                self.state = FlowState::Closed;
                self.selected_date = None;
                self.selected_time = None;
                vec![
                    Effect::ShowNotice(BOOKING_CONFIRMED_NOTICE.to_string()),
                    Effect::ResetForm,
                ]
            }
            FlowEvent::DispatchFailed if self.state == FlowState::Submitting => {
                // Selections stay put so the client can simply retry.
                self.state = FlowState::FormOpen;
                vec![Effect::ShowError(BookingError::DeliveryFailed.to_string())]
            }
            _ => Vec::new(),
        }
    }

    /// Selection-style interactions are accepted while the modal is open
    /// and no dispatch is in flight.
    fn accepts_selection(&self) -> bool {
        matches!(
            self.state,
            FlowState::CalendarOpen | FlowState::TimeOpen | FlowState::FormOpen
        )
    }

    fn open(&mut self, service: Option<String>, today: DaySelection) -> Vec<Effect> {
        self.today = today;
        self.cursor = CalendarCursor::new(today.year, today.month);
        self.selected_date = None;
        self.selected_time = None;
        self.state = FlowState::CalendarOpen;

        let mut effects = vec![Effect::ClearFeedback, Effect::ResetForm];
        if let Some(service) = service {
            effects.push(Effect::PrefillService(service));
        }
        effects
    }

    fn select_day(&mut self, day: u32) -> Vec<Effect> {
        // Padding cells never reach here with a valid day of the displayed
        // month; anything outside it is ignored.
        if day == 0 || day > days_in_month(self.cursor.year, self.cursor.month) {
            return Vec::new();
        }
        self.selected_date = Some(DaySelection {
            year: self.cursor.year,
            month: self.cursor.month,
            day,
        });
        if self.state == FlowState::CalendarOpen {
            self.state = FlowState::TimeOpen;
        }
        Vec::new()
    }

    fn select_slot(&mut self, time: String) -> Vec<Effect> {
        if self.selected_date.is_none() || !is_catalog_slot(&self.config, &time) {
            return Vec::new();
        }
        self.selected_time = Some(time);
        self.state = FlowState::FormOpen;
        Vec::new()
    }

    fn close(&mut self) -> Vec<Effect> {
        // State clears synchronously; only the visual hide is deferred by
        // the presentation layer.
        self.state = FlowState::Closed;
        self.selected_date = None;
        self.selected_time = None;
        vec![Effect::ClearFeedback, Effect::ResetForm]
    }

    fn submit(&mut self, fields: BookingFields) -> Vec<Effect> {
        // The machine should make a missing schedule unreachable, but this
        // check is the authoritative one.
        let (date, time) = match (self.selected_date, self.selected_time.clone()) {
            (Some(date), Some(time)) => (date, time),
            _ => {
                return vec![Effect::ShowError(
                    BookingError::MissingSchedule.to_string(),
                )]
            }
        };

        match BookingRequest::from_fields(&fields, date, time, &self.config) {
            Ok(request) => {
                self.state = FlowState::Submitting;
                vec![Effect::ClearFeedback, Effect::Dispatch(request)]
            }
            Err(error) => vec![Effect::ShowError(error.to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::compose_message;

    fn today() -> DaySelection {
        DaySelection {
            year: 2025,
            month: 6,
            day: 15,
        }
    }

    fn new_flow() -> BookingFlow {
        BookingFlow::new(BookingConfig::default(), today())
    }

    fn open_flow(service: Option<&str>) -> BookingFlow {
        let mut flow = new_flow();
        flow.apply(FlowEvent::Open {
            service: service.map(str::to_string),
            today: today(),
        });
        flow
    }

    fn valid_fields() -> BookingFields {
        BookingFields {
            service: "Peeling Facial".to_string(),
            name: "Maria Silva".to_string(),
            phone: "(11) 91234-5678".to_string(),
            notes: String::new(),
        }
    }

    fn dispatched(effects: &[Effect]) -> Option<&BookingRequest> {
        effects.iter().find_map(|effect| match effect {
            Effect::Dispatch(request) => Some(request),
            _ => None,
        })
    }

    #[test]
    fn test_open_resets_and_prefills_service() {
        let mut flow = new_flow();
        let effects = flow.apply(FlowEvent::Open {
            service: Some("Peeling Facial".to_string()),
            today: today(),
        });
        assert_eq!(flow.state(), FlowState::CalendarOpen);
        assert_eq!(flow.cursor(), CalendarCursor::new(2025, 6));
        assert!(effects.contains(&Effect::PrefillService("Peeling Facial".to_string())));
        assert!(effects.contains(&Effect::ResetForm));
    }

    #[test]
    fn test_day_then_slot_reach_the_form() {
        let mut flow = open_flow(None);
        flow.apply(FlowEvent::DaySelected(20));
        assert_eq!(flow.state(), FlowState::TimeOpen);
        flow.apply(FlowEvent::SlotSelected("14:30".to_string()));
        assert_eq!(flow.state(), FlowState::FormOpen);
        assert_eq!(flow.selected_time(), Some("14:30"));
    }

    #[test]
    fn test_month_navigation_keeps_selection() {
        let mut flow = open_flow(None);
        flow.apply(FlowEvent::DaySelected(20));
        flow.apply(FlowEvent::NextMonth);
        assert_eq!(flow.cursor(), CalendarCursor::new(2025, 7));
        // The June selection survives even though July is displayed.
        assert_eq!(
            flow.selected_date(),
            Some(DaySelection {
                year: 2025,
                month: 6,
                day: 20
            })
        );
    }

    #[test]
    fn test_out_of_month_day_is_a_no_op() {
        let mut flow = open_flow(None);
        let effects = flow.apply(FlowEvent::DaySelected(31));
        assert!(effects.is_empty());
        assert_eq!(flow.state(), FlowState::CalendarOpen);
        assert_eq!(flow.selected_date(), None);
    }

    #[test]
    fn test_out_of_catalog_slot_is_a_no_op() {
        let mut flow = open_flow(None);
        flow.apply(FlowEvent::DaySelected(20));
        let effects = flow.apply(FlowEvent::SlotSelected("08:00".to_string()));
        assert!(effects.is_empty());
        assert_eq!(flow.state(), FlowState::TimeOpen);
        assert_eq!(flow.selected_time(), None);
    }

    #[test]
    fn test_slot_before_day_is_a_no_op() {
        let mut flow = open_flow(None);
        let effects = flow.apply(FlowEvent::SlotSelected("14:30".to_string()));
        assert!(effects.is_empty());
        assert_eq!(flow.state(), FlowState::CalendarOpen);
    }

    #[test]
    fn test_events_while_closed_are_no_ops() {
        let mut flow = new_flow();
        assert!(flow.apply(FlowEvent::DaySelected(10)).is_empty());
        assert!(flow.apply(FlowEvent::NextMonth).is_empty());
        assert!(flow.apply(FlowEvent::Submit(valid_fields())).is_empty());
        assert!(flow.apply(FlowEvent::DispatchSucceeded).is_empty());
        assert_eq!(flow.state(), FlowState::Closed);
    }

    #[test]
    fn test_back_to_calendar_keeps_selections() {
        let mut flow = open_flow(None);
        flow.apply(FlowEvent::DaySelected(20));
        flow.apply(FlowEvent::SlotSelected("14:30".to_string()));
        flow.apply(FlowEvent::BackToCalendar);
        assert_eq!(flow.state(), FlowState::TimeOpen);
        assert!(flow.selected_date().is_some());
        assert_eq!(flow.selected_time(), Some("14:30"));
    }

    #[test]
    fn test_close_clears_selections_synchronously() {
        let mut flow = open_flow(None);
        flow.apply(FlowEvent::DaySelected(20));
        flow.apply(FlowEvent::SlotSelected("14:30".to_string()));
        flow.apply(FlowEvent::Close);
        assert_eq!(flow.state(), FlowState::Closed);
        assert_eq!(flow.selected_date(), None);
        assert_eq!(flow.selected_time(), None);
    }

    #[test]
    fn test_submit_without_schedule_is_rejected_before_dispatch() {
        let mut flow = open_flow(None);
        let effects = flow.apply(FlowEvent::Submit(valid_fields()));
        assert!(dispatched(&effects).is_none());
        assert!(effects.contains(&Effect::ShowError(
            "Por favor, selecione uma data e horário.".to_string()
        )));
        assert_ne!(flow.state(), FlowState::Submitting);
    }

    #[test]
    fn test_submit_with_bad_phone_is_rejected_before_dispatch() {
        let mut flow = open_flow(None);
        flow.apply(FlowEvent::DaySelected(20));
        flow.apply(FlowEvent::SlotSelected("14:30".to_string()));

        let mut fields = valid_fields();
        fields.phone = "119999988".to_string();
        let effects = flow.apply(FlowEvent::Submit(fields));
        assert!(dispatched(&effects).is_none());
        assert!(effects.contains(&Effect::ShowError(
            "Por favor, insira um número de telefone válido".to_string()
        )));
        assert_eq!(flow.state(), FlowState::FormOpen);
    }

    #[test]
    fn test_dispatch_failure_returns_to_form_with_selections() {
        let mut flow = open_flow(None);
        flow.apply(FlowEvent::DaySelected(20));
        flow.apply(FlowEvent::SlotSelected("14:30".to_string()));
        flow.apply(FlowEvent::Submit(valid_fields()));
        assert_eq!(flow.state(), FlowState::Submitting);

        let effects = flow.apply(FlowEvent::DispatchFailed);
        assert_eq!(flow.state(), FlowState::FormOpen);
        assert!(flow.selected_date().is_some());
        assert_eq!(flow.selected_time(), Some("14:30"));
        assert!(effects.contains(&Effect::ShowError(
            "Ocorreu um erro ao processar seu agendamento. Por favor, tente novamente."
                .to_string()
        )));
    }

    #[test]
    fn test_no_second_submission_while_dispatching() {
        let mut flow = open_flow(None);
        flow.apply(FlowEvent::DaySelected(20));
        flow.apply(FlowEvent::SlotSelected("14:30".to_string()));
        flow.apply(FlowEvent::Submit(valid_fields()));
        assert_eq!(flow.state(), FlowState::Submitting);

        let effects = flow.apply(FlowEvent::Submit(valid_fields()));
        assert!(effects.is_empty());
        assert_eq!(flow.state(), FlowState::Submitting);
    }

    #[test]
    fn test_full_booking_flow_end_to_end() {
        let mut flow = open_flow(Some("Peeling Facial"));
        flow.apply(FlowEvent::DaySelected(20));
        flow.apply(FlowEvent::SlotSelected("14:30".to_string()));

        let effects = flow.apply(FlowEvent::Submit(valid_fields()));
        let request = dispatched(&effects).expect("a dispatch effect");
        assert_eq!(request.time, "14:30");

        let encoded = compose_message(request, flow.config());
        let decoded = urlencoding::decode(&encoded).unwrap();
        assert!(decoded.contains("R$ 80,00"));

        flow.apply(FlowEvent::DispatchSucceeded);
        assert_eq!(flow.state(), FlowState::Closed);
        assert_eq!(flow.selected_date(), None);
        assert_eq!(flow.selected_time(), None);
    }

    #[test]
    fn test_reopen_after_success_starts_clean() {
        let mut flow = open_flow(None);
        flow.apply(FlowEvent::DaySelected(20));
        flow.apply(FlowEvent::SlotSelected("14:30".to_string()));
        flow.apply(FlowEvent::Submit(valid_fields()));
        flow.apply(FlowEvent::DispatchSucceeded);

        let effects = flow.apply(FlowEvent::Open {
            service: None,
            today: today(),
        });
        assert_eq!(flow.state(), FlowState::CalendarOpen);
        assert_eq!(flow.selected_date(), None);
        assert!(effects.contains(&Effect::ResetForm));
    }
}
