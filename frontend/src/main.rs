mod components;
mod hooks;
mod services;

use web_sys::MouseEvent;
use yew::prelude::*;

use shared::service_catalog;

use components::{BookingModal, ServiceCard};
use hooks::use_booking_flow;
use services::delivery::DeliveryClient;

#[function_component(App)]
fn app() -> Html {
    let booking = use_booking_flow(DeliveryClient::new());

    let on_book_service = {
        let open = booking.actions.open.clone();
        Callback::from(move |service: String| open.emit(Some(service)))
    };

    // Generic call-to-action without a service attached.
    let on_book = {
        let open = booking.actions.open.clone();
        Callback::from(move |_: MouseEvent| open.emit(None))
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Studio Gaby Xavier"}</h1>
                    <button type="button" class="btn btn-primary" onclick={on_book}>
                        {"Agende seu horário"}
                    </button>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <section class="services-section">
                        <h2>{"Nossos Serviços"}</h2>
                        <div class="services-grid">
                            {for service_catalog().iter().map(|(name, price)| {
                                html! {
                                    <ServiceCard
                                        name={*name}
                                        price={*price}
                                        on_book={on_book_service.clone()}
                                    />
                                }
                            })}
                        </div>
                    </section>
                </div>
            </main>

            {if let Some(notice) = booking.state.notice.as_ref() {
                html! {
                    <div class="form-message success booking-notice">
                        {notice}
                    </div>
                }
            } else { html! {} }}

            <BookingModal
                state={booking.state.clone()}
                actions={booking.actions.clone()}
            />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
