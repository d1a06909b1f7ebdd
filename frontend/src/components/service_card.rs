use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub name: AttrValue,
    pub price: AttrValue,
    /// Emits the service identifier this card advertises.
    pub on_book: Callback<String>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let onclick = {
        let on_book = props.on_book.clone();
        let name = props.name.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(name.to_string()))
    };

    html! {
        <div class="service-card">
            <h3 class="service-name">{&props.name}</h3>
            <span class="service-price">{&props.price}</span>
            <button
                type="button"
                class="btn btn-primary"
                data-service={props.name.clone()}
                {onclick}
            >
                {"Agendar"}
            </button>
        </div>
    }
}
