use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, MouseEvent};
use yew::prelude::*;

use shared::{mask_phone_input, BookingConfig, BookingFields, BookingFlow, Effect, FlowEvent, FlowState};

use crate::services::date_utils::current_day;
use crate::services::delivery::DeliveryClient;
use crate::services::logging::Logger;

/// How long a success notice stays on screen.
const NOTICE_DURATION_MS: u32 = 4000;

/// Snapshot of everything the widget needs to render this frame.
#[derive(Clone, PartialEq)]
pub struct BookingWidgetState {
    pub flow: BookingFlow,
    /// The modal stays mounted (without its `active` class) while the exit
    /// transition plays.
    pub closing: bool,
    pub service: String,
    pub name: String,
    pub phone: String,
    pub notes: String,
    pub error_message: Option<String>,
    pub notice: Option<String>,
}

impl BookingWidgetState {
    /// Whether the modal markup should be in the tree at all.
    pub fn mounted(&self) -> bool {
        self.flow.is_open() || self.closing
    }

    pub fn submitting(&self) -> bool {
        self.flow.state() == FlowState::Submitting
    }
}

#[derive(Clone, PartialEq)]
pub struct BookingWidgetActions {
    pub open: Callback<Option<String>>,
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub select_day: Callback<u32>,
    pub select_slot: Callback<String>,
    pub back_to_calendar: Callback<MouseEvent>,
    pub close: Callback<MouseEvent>,
    pub edit_service: Callback<Event>,
    pub edit_name: Callback<Event>,
    pub edit_phone: Callback<InputEvent>,
    pub edit_notes: Callback<Event>,
    pub submit: Callback<()>,
}

pub struct UseBookingFlowResult {
    pub state: BookingWidgetState,
    pub actions: BookingWidgetActions,
}

/// Everything `drive` needs to apply an event and execute its effects.
/// The flow lives behind an `Rc<RefCell<_>>` so that dispatch completions
/// arriving after later renders still see the current machine.
#[derive(Clone)]
struct FlowHandles {
    flow: Rc<RefCell<BookingFlow>>,
    redraw: UseForceUpdateHandle,
    service: UseStateHandle<String>,
    name: UseStateHandle<String>,
    phone: UseStateHandle<String>,
    notes: UseStateHandle<String>,
    closing: UseStateHandle<bool>,
    error_message: UseStateHandle<Option<String>>,
    notice: UseStateHandle<Option<String>>,
    delivery: DeliveryClient,
}

fn drive(handles: &FlowHandles, event: FlowEvent) {
    let was_open = handles.flow.borrow().is_open();
    let effects = handles.flow.borrow_mut().apply(event);
    let (now_open, close_delay) = {
        let flow = handles.flow.borrow();
        (flow.is_open(), flow.config().close_delay_ms)
    };

    if was_open && !now_open {
        // Active styling drops with this render; keep the element mounted
        // until the exit transition has played.
        handles.closing.set(true);
        let closing = handles.closing.clone();
        spawn_local(async move {
            TimeoutFuture::new(close_delay).await;
            closing.set(false);
        });
    }

    for effect in effects {
        match effect {
            Effect::PrefillService(service) => handles.service.set(service),
            Effect::ShowError(message) => handles.error_message.set(Some(message)),
            Effect::ShowNotice(message) => {
                handles.notice.set(Some(message));
                let notice = handles.notice.clone();
                spawn_local(async move {
                    TimeoutFuture::new(NOTICE_DURATION_MS).await;
                    notice.set(None);
                });
            }
            Effect::ClearFeedback => {
                handles.error_message.set(None);
                handles.notice.set(None);
            }
            Effect::ResetForm => {
                handles.service.set(String::new());
                handles.name.set(String::new());
                handles.phone.set(String::new());
                handles.notes.set(String::new());
            }
            Effect::Dispatch(request) => {
                let handles = handles.clone();
                spawn_local(async move {
                    match handles.delivery.dispatch(&request).await {
                        Ok(()) => {
                            Logger::info_with_component(
                                "booking",
                                "Booking handed to the delivery channel",
                            );
                            drive(&handles, FlowEvent::DispatchSucceeded);
                        }
                        Err(error) => {
                            Logger::error_with_component(
                                "booking",
                                &format!("Dispatch failed: {}", error),
                            );
                            drive(&handles, FlowEvent::DispatchFailed);
                        }
                    }
                });
            }
        }
    }

    handles.redraw.force_update();
}

/// Owns the booking state machine and wires UI events into it.
#[hook]
pub fn use_booking_flow(delivery: DeliveryClient) -> UseBookingFlowResult {
    let flow = use_mut_ref(|| BookingFlow::new(BookingConfig::default(), current_day()));
    let redraw = use_force_update();
    let service = use_state(String::new);
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let notes = use_state(String::new);
    let closing = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);
    let notice = use_state(|| Option::<String>::None);

    let handles = FlowHandles {
        flow: flow.clone(),
        redraw,
        service: service.clone(),
        name: name.clone(),
        phone: phone.clone(),
        notes: notes.clone(),
        closing: closing.clone(),
        error_message: error_message.clone(),
        notice: notice.clone(),
        delivery,
    };

    let open = {
        let handles = handles.clone();
        Callback::from(move |service: Option<String>| {
            drive(
                &handles,
                FlowEvent::Open {
                    service,
                    today: current_day(),
                },
            )
        })
    };

    let prev_month = {
        let handles = handles.clone();
        Callback::from(move |_: MouseEvent| drive(&handles, FlowEvent::PrevMonth))
    };

    let next_month = {
        let handles = handles.clone();
        Callback::from(move |_: MouseEvent| drive(&handles, FlowEvent::NextMonth))
    };

    let select_day = {
        let handles = handles.clone();
        Callback::from(move |day: u32| drive(&handles, FlowEvent::DaySelected(day)))
    };

    let select_slot = {
        let handles = handles.clone();
        Callback::from(move |time: String| drive(&handles, FlowEvent::SlotSelected(time)))
    };

    let back_to_calendar = {
        let handles = handles.clone();
        Callback::from(move |_: MouseEvent| drive(&handles, FlowEvent::BackToCalendar))
    };

    let close = {
        let handles = handles.clone();
        Callback::from(move |_: MouseEvent| drive(&handles, FlowEvent::Close))
    };

    let edit_service = {
        let service = service.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            service.set(select.value());
        })
    };

    let edit_name = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let edit_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let masked = mask_phone_input(&input.value());
            input.set_value(&masked);
            phone.set(masked);
        })
    };

    let edit_notes = {
        let notes = notes.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            notes.set(area.value());
        })
    };

    let submit = {
        let handles = handles.clone();
        Callback::from(move |_: ()| {
            let fields = BookingFields {
                service: (*handles.service).clone(),
                name: (*handles.name).clone(),
                phone: (*handles.phone).clone(),
                notes: (*handles.notes).clone(),
            };
            drive(&handles, FlowEvent::Submit(fields));
        })
    };

    let state = BookingWidgetState {
        flow: flow.borrow().clone(),
        closing: *closing,
        service: (*service).clone(),
        name: (*name).clone(),
        phone: (*phone).clone(),
        notes: (*notes).clone(),
        error_message: (*error_message).clone(),
        notice: (*notice).clone(),
    };

    let actions = BookingWidgetActions {
        open,
        prev_month,
        next_month,
        select_day,
        select_slot,
        back_to_calendar,
        close,
        edit_service,
        edit_name,
        edit_phone,
        edit_notes,
        submit,
    };

    UseBookingFlowResult { state, actions }
}
