use web_sys::MouseEvent;
use yew::prelude::*;

use shared::MonthGrid;

#[derive(Properties, PartialEq)]
pub struct BookingCalendarProps {
    pub grid: MonthGrid,
    pub title: AttrValue,
    /// Day of the displayed month currently selected, if the selection
    /// belongs to it.
    pub selected_day: Option<u32>,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
    pub on_select_day: Callback<u32>,
}

#[function_component(BookingCalendar)]
pub fn booking_calendar(props: &BookingCalendarProps) -> Html {
    html! {
        <div class="booking-calendar">
            <div class="calendar-header">
                <button
                    type="button"
                    class="nav-button prev-month"
                    onclick={props.on_prev_month.clone()}
                >
                    {"‹"}
                </button>
                <span class="calendar-title">{&props.title}</span>
                <button
                    type="button"
                    class="nav-button next-month"
                    onclick={props.on_next_month.clone()}
                >
                    {"›"}
                </button>
            </div>

            <div class="calendar-weekdays">
                <div class="weekday">{"Dom"}</div>
                <div class="weekday">{"Seg"}</div>
                <div class="weekday">{"Ter"}</div>
                <div class="weekday">{"Qua"}</div>
                <div class="weekday">{"Qui"}</div>
                <div class="weekday">{"Sex"}</div>
                <div class="weekday">{"Sáb"}</div>
            </div>

            <div class="calendar-grid">
                {for props.grid.cells.iter().map(|cell| {
                    let selectable = cell.selectable();
                    let is_selected = selectable && props.selected_day == Some(cell.day);
                    let day = cell.day;
                    let on_select_day = props.on_select_day.clone();

                    html! {
                        <button
                            type="button"
                            class={classes!(
                                "calendar-day",
                                (!selectable).then(|| "disabled"),
                                cell.is_today.then(|| "today"),
                                is_selected.then(|| "selected"),
                            )}
                            disabled={!selectable}
                            onclick={Callback::from(move |_: MouseEvent| {
                                on_select_day.emit(day)
                            })}
                        >
                            {day}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
