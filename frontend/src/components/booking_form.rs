use web_sys::{InputEvent, MouseEvent};
use yew::prelude::*;

use shared::service_catalog;

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    /// The form stays mounted while hidden so field values survive a trip
    /// back to the calendar.
    pub visible: bool,
    pub submitting: bool,
    pub service: String,
    pub name: String,
    pub phone: String,
    pub notes: String,
    pub date_display: AttrValue,
    pub time_display: AttrValue,
    pub error_message: Option<String>,
    pub on_service_change: Callback<Event>,
    pub on_name_change: Callback<Event>,
    pub on_phone_input: Callback<InputEvent>,
    pub on_notes_change: Callback<Event>,
    pub on_back: Callback<MouseEvent>,
    pub on_submit: Callback<()>,
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form
            class={classes!("booking-form", props.visible.then(|| "active"))}
            {onsubmit}
        >
            <button
                type="button"
                class="back-to-calendar"
                onclick={props.on_back.clone()}
                disabled={props.submitting}
            >
                {"‹ Voltar ao calendário"}
            </button>

            {if let Some(error) = props.error_message.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <div class="form-group">
                <label for="service">{"Serviço"}</label>
                <select
                    id="service"
                    name="service"
                    onchange={props.on_service_change.clone()}
                    disabled={props.submitting}
                >
                    <option value="" selected={props.service.is_empty()}>
                        {"Selecione o serviço"}
                    </option>
                    {for service_catalog().iter().map(|(name, price)| {
                        html! {
                            <option
                                value={*name}
                                selected={props.service == *name}
                            >
                                {format!("{} - {}", name, price)}
                            </option>
                        }
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="date">{"Data"}</label>
                <input
                    type="text"
                    id="date"
                    name="date"
                    value={props.date_display.clone()}
                    readonly=true
                />
            </div>

            <div class="form-group">
                <label for="time">{"Horário"}</label>
                <input
                    type="text"
                    id="time"
                    name="time"
                    value={props.time_display.clone()}
                    readonly=true
                />
            </div>

            <div class="form-group">
                <label for="name">{"Nome completo"}</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    placeholder="Seu nome"
                    value={props.name.clone()}
                    onchange={props.on_name_change.clone()}
                    disabled={props.submitting}
                />
            </div>

            <div class="form-group">
                <label for="phone">{"Telefone"}</label>
                <input
                    type="tel"
                    id="phone"
                    name="phone"
                    placeholder="(11) 91234-5678"
                    value={props.phone.clone()}
                    oninput={props.on_phone_input.clone()}
                    disabled={props.submitting}
                />
            </div>

            <div class="form-group">
                <label for="notes">{"Observações (opcional)"}</label>
                <textarea
                    id="notes"
                    name="notes"
                    placeholder="Alguma observação para o atendimento?"
                    value={props.notes.clone()}
                    onchange={props.on_notes_change.clone()}
                    disabled={props.submitting}
                />
            </div>

            <button
                type="submit"
                class="btn btn-primary confirm-booking"
                disabled={props.submitting}
            >
                {if props.submitting {
                    "Processando..."
                } else {
                    "Confirmar Agendamento"
                }}
            </button>
        </form>
    }
}
