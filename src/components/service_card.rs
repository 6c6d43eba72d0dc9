use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::Service;
use crate::slug::slugify;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: &'static Service,
    /// Position in the grid, staggers the entrance.
    pub index: usize,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let ServiceCardProps { service, index } = props;
    let delay = 0.1 * *index as f64;

    html! {
        <div class="service-card" style={format!("animation-delay: {:.1}s;", delay)}>
            <div class="service-card-image">
                <img src={service.image} alt={service.title} loading="lazy" />
                <div class="service-card-shade"></div>
            </div>
            <div class="service-card-body">
                <h3>{service.title}</h3>
                <p>{service.description}</p>
                <Link<Route> to={Route::Service { slug: slugify(service.title) }} classes="service-card-link">
                    {"Learn more"}<span class="arrow">{"→"}</span>
                </Link<Route>>
            </div>
        </div>
    }
}
