use yew::prelude::*;
use web_sys::MouseEvent;

use crate::breakpoint::{use_breakpoint, Breakpoint};
use crate::content::NAV_LINKS;
use crate::nav::{trigger_action, HeaderLayout, NavState, TriggerAction};

#[derive(Properties, PartialEq)]
pub struct MainNavProps {
    pub nav: NavState,
    pub scroll_y: u32,
    pub on_manual_reveal: Callback<()>,
}

#[function_component(MainNav)]
pub fn main_nav(props: &MainNavProps) -> Html {
    let MainNavProps { nav, scroll_y, on_manual_reveal } = props;
    let sheet_open = use_state(|| false);
    let is_large = use_breakpoint(Breakpoint::Lg);
    let layout = HeaderLayout::derive(*nav, is_large, *scroll_y);

    let on_trigger = {
        let sheet_open = sheet_open.clone();
        let on_manual_reveal = on_manual_reveal.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match trigger_action(is_large) {
                TriggerAction::Reveal => on_manual_reveal.emit(()),
                TriggerAction::ToggleSheet => sheet_open.set(!*sheet_open),
            }
        })
    };

    let close_sheet = {
        let sheet_open = sheet_open.clone();
        Callback::from(move |_: MouseEvent| {
            sheet_open.set(false);
        })
    };

    let show_sheet = *sheet_open && !is_large;

    html! {
        <header class={classes!("main-nav", layout.tinted.then(|| "tinted"))}>
            <div class="main-nav-inner">
                {
                    if layout.show_desktop_nav {
                        html! {
                            <>
                                <nav class="desktop-nav">
                                    <ul>
                                        { for NAV_LINKS.iter().map(|link| html! {
                                            <li>
                                                <a href={link.href} class="nav-link">{link.label}</a>
                                            </li>
                                        }) }
                                    </ul>
                                </nav>
                                <button class="nav-search" aria-label="Search">
                                    <span class="search-icon"></span>
                                </button>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if layout.show_compact_trigger {
                        html! {
                            <button class="nav-trigger" onclick={on_trigger} aria-label="Toggle menu">
                                <span></span>
                                <span></span>
                                <span></span>
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            {
                if show_sheet {
                    html! {
                        <div class="nav-sheet">
                            <div class="nav-sheet-header">
                                <span>{"MENU"}</span>
                                <button class="nav-sheet-close" onclick={close_sheet.clone()} aria-label="Close menu">{"×"}</button>
                            </div>
                            <div class="elegant-line"></div>
                            <nav>
                                <ul>
                                    { for NAV_LINKS.iter().map(|link| html! {
                                        <li onclick={close_sheet.clone()}>
                                            <a href={link.href} class="mobile-nav-link">{link.label}</a>
                                        </li>
                                    }) }
                                </ul>
                            </nav>
                            <a href="/contact-us" class="sheet-cta" onclick={close_sheet.clone()}>{"Get in Touch"}</a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .main-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    background: transparent;
                    transition: background-color 0.3s ease, backdrop-filter 0.3s ease;
                    animation: navSlideIn 0.5s ease-out 1s both;
                }
                .main-nav.tinted {
                    background: rgba(10, 10, 12, 0.7);
                    backdrop-filter: blur(12px);
                }
                @keyframes navSlideIn {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }
                .main-nav-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem 0 6rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: flex-end;
                }
                .desktop-nav ul {
                    display: flex;
                    gap: 3rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    animation: fadeIn 0.3s ease-out;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.875rem;
                    font-weight: 300;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .nav-search {
                    margin-left: 3rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .search-icon {
                    display: block;
                    width: 14px;
                    height: 14px;
                    border: 2px solid #fff;
                    border-radius: 50%;
                }
                .nav-trigger {
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .nav-trigger span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                .nav-sheet {
                    position: fixed;
                    top: 0;
                    right: 0;
                    bottom: 0;
                    width: min(300px, 100vw);
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    background: #141416;
                    border-left: 1px solid rgba(196, 160, 96, 0.2);
                    animation: sheetIn 0.3s ease-out;
                }
                @keyframes sheetIn {
                    from { transform: translateX(100%); }
                    to { transform: translateX(0); }
                }
                .nav-sheet-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    color: #fff;
                    letter-spacing: 0.1em;
                    font-weight: 300;
                }
                .nav-sheet-close {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .nav-sheet ul {
                    list-style: none;
                    padding: 2rem 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }
                .mobile-nav-link {
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                    font-size: 1.25rem;
                    font-weight: 300;
                }
                .sheet-cta {
                    margin-top: auto;
                    padding: 1.25rem;
                    text-align: center;
                    color: #fff;
                    text-decoration: none;
                    background: #c4a060;
                }
                @media (min-width: 768px) {
                    .main-nav-inner {
                        height: 6rem;
                        padding: 0 4rem 0 10rem;
                    }
                    .nav-sheet {
                        width: 400px;
                    }
                }
                "#}
            </style>
        </header>
    }
}
