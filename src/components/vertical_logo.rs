use yew::prelude::*;
use yew_router::prelude::*;

use crate::logo::target_height;
use crate::spring::{use_spring, PIXEL_REST};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct VerticalLogoProps {
    pub scroll_y: u32,
}

#[function_component(VerticalLogo)]
pub fn vertical_logo(props: &VerticalLogoProps) -> Html {
    let height = use_spring(target_height(props.scroll_y), PIXEL_REST);

    html! {
        <div class="vertical-logo" style={format!("height: {:.1}px;", height)}>
            <Link<Route> to={Route::Home} classes="vertical-logo-link">
                {"AMARA "}<span class="accent">{"&"}</span>{" PARTNERS"}
            </Link<Route>>
            <style>
                {r#"
                .vertical-logo {
                    position: fixed;
                    top: 2rem;
                    left: 1.5rem;
                    z-index: 45;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .vertical-logo-link {
                    writing-mode: vertical-rl;
                    transform: rotate(180deg);
                    font-size: 1.5rem;
                    font-weight: 300;
                    letter-spacing: 0.3em;
                    color: #fff;
                    text-decoration: none;
                }
                .vertical-logo-link .accent {
                    color: #c4a060;
                    font-weight: 400;
                }
                "#}
            </style>
        </div>
    }
}
