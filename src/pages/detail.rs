use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{find_insight, find_service};
use crate::dom;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct DetailProps {
    pub slug: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &DetailProps) -> Html {
    use_scroll_to_top();

    match find_service(&props.slug) {
        Some(service) => html! {
            <article class="detail-page">
                <img class="detail-hero" src={service.image} alt={service.title} />
                <span class="tag">{"OUR SERVICES"}</span>
                <h1>{service.title}</h1>
                <p>{service.description}</p>
                <BackHome />
                <DetailStyle />
            </article>
        },
        None => html! { <NotFound /> },
    }
}

#[function_component(InsightDetail)]
pub fn insight_detail(props: &DetailProps) -> Html {
    use_scroll_to_top();

    match find_insight(&props.slug) {
        Some(insight) => html! {
            <article class="detail-page">
                <img class="detail-hero" src={insight.image} alt={insight.title} />
                <span class="tag">{insight.category}</span>
                <h1>{insight.title}</h1>
                {
                    if let Some(date) = insight.date {
                        html! { <p class="detail-date">{date}</p> }
                    } else {
                        html! {}
                    }
                }
                <BackHome />
                <DetailStyle />
            </article>
        },
        None => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <article class="detail-page">
            <h1>{"Page not found"}</h1>
            <p>{"The page you are looking for does not exist or has moved."}</p>
            <BackHome />
            <DetailStyle />
        </article>
    }
}

#[hook]
fn use_scroll_to_top() {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            dom::scroll_to_top();
            || ()
        },
        (),
    );
}

#[function_component(BackHome)]
fn back_home() -> Html {
    html! {
        <Link<Route> to={Route::Home} classes="detail-back">
            {"← Back to home"}
        </Link<Route>>
    }
}

#[function_component(DetailStyle)]
fn detail_style() -> Html {
    html! {
        <style>
            {r#"
            .detail-page {
                max-width: 48rem;
                margin: 0 auto;
                padding: 8rem 1.5rem;
                color: #f5f5f5;
            }
            .detail-hero {
                width: 100%;
                aspect-ratio: 16 / 9;
                object-fit: cover;
                margin-bottom: 3rem;
            }
            .detail-page h1 {
                font-size: 2.5rem;
                margin: 1rem 0 2rem;
            }
            .detail-date {
                color: #a3a3a3;
            }
            .detail-back {
                display: inline-block;
                margin-top: 3rem;
                color: #c4a060;
                text-decoration: none;
            }
            "#}
        </style>
    }
}
