use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeSlotGridProps {
    pub slots: Vec<String>,
    pub selected: Option<String>,
    pub on_select: Callback<String>,
}

#[function_component(TimeSlotGrid)]
pub fn time_slot_grid(props: &TimeSlotGridProps) -> Html {
    html! {
        <div class="time-slots">
            {for props.slots.iter().map(|slot| {
                let is_selected = props.selected.as_deref() == Some(slot.as_str());
                let on_select = props.on_select.clone();
                let slot = slot.clone();
                let label = slot.clone();

                html! {
                    <button
                        type="button"
                        class={classes!("time-slot", is_selected.then(|| "selected"))}
                        onclick={Callback::from(move |_: MouseEvent| {
                            on_select.emit(slot.clone())
                        })}
                    >
                        {label}
                    </button>
                }
            })}
        </div>
    }
}
