use web_sys::MouseEvent;
use yew::prelude::*;

use shared::FlowState;

use crate::components::booking_form::BookingForm;
use crate::components::calendar::BookingCalendar;
use crate::components::time_slot_grid::TimeSlotGrid;
use crate::hooks::{BookingWidgetActions, BookingWidgetState};

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub state: BookingWidgetState,
    pub actions: BookingWidgetActions,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let state = &props.state;
    let actions = &props.actions;

    if !state.mounted() {
        return html! {};
    }

    let flow = &state.flow;
    let cursor = flow.cursor();
    let grid = flow.month_grid();

    // The visual selection only shows while its month is the one displayed.
    let selected_day = flow
        .selected_date()
        .filter(|date| date.year == cursor.year && date.month == cursor.month)
        .map(|date| date.day);

    let show_slots = flow.selected_date().is_some();
    let show_form = matches!(flow.state(), FlowState::FormOpen | FlowState::Submitting);

    let date_display = flow
        .selected_date()
        .map(|date| date.display())
        .unwrap_or_default();
    let time_display = flow.selected_time().unwrap_or_default().to_string();

    let on_backdrop_click = actions.close.clone();
    let on_surface_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div
            class={classes!("booking-modal", flow.is_open().then(|| "active"))}
            onclick={on_backdrop_click}
        >
            <div class="booking-modal-surface" onclick={on_surface_click}>
                <button
                    type="button"
                    class="close-modal"
                    onclick={actions.close.clone()}
                >
                    {"×"}
                </button>

                <BookingCalendar
                    grid={grid}
                    title={cursor.title()}
                    selected_day={selected_day}
                    on_prev_month={actions.prev_month.clone()}
                    on_next_month={actions.next_month.clone()}
                    on_select_day={actions.select_day.clone()}
                />

                {if show_slots {
                    html! {
                        <TimeSlotGrid
                            slots={flow.slots()}
                            selected={flow.selected_time().map(str::to_string)}
                            on_select={actions.select_slot.clone()}
                        />
                    }
                } else { html! {} }}

                <BookingForm
                    visible={show_form}
                    submitting={state.submitting()}
                    service={state.service.clone()}
                    name={state.name.clone()}
                    phone={state.phone.clone()}
                    notes={state.notes.clone()}
                    date_display={date_display}
                    time_display={time_display}
                    error_message={state.error_message.clone()}
                    on_service_change={actions.edit_service.clone()}
                    on_name_change={actions.edit_name.clone()}
                    on_phone_input={actions.edit_phone.clone()}
                    on_notes_change={actions.edit_notes.clone()}
                    on_back={actions.back_to_calendar.clone()}
                    on_submit={actions.submit.clone()}
                />
            </div>
        </div>
    }
}
