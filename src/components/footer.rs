use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{FIRM_LEGAL_NAME, FIRM_NAME, FIRM_TAGLINE};
use crate::content::{CONTACT_LINES, LEGAL_LINKS, NAV_LINKS, SERVICES};
use crate::slug::slugify;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3>{FIRM_NAME}</h3>
                        <p>{format!("{}.", FIRM_TAGLINE)}</p>
                    </div>
                    <div>
                        <h3>{"Quick Links"}</h3>
                        <ul>
                            // Contact lives in its own column
                            { for NAV_LINKS.iter().filter(|link| link.href != "/contact-us").map(|link| html! {
                                <li><a href={link.href}>{link.label}</a></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h3>{"Practice Areas"}</h3>
                        <ul>
                            { for SERVICES.iter().take(4).map(|service| html! {
                                <li>
                                    <Link<Route> to={Route::Service { slug: slugify(service.title) }}>
                                        {service.title}
                                    </Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h3>{"Contact"}</h3>
                        <address>
                            { for CONTACT_LINES.iter().map(|line| html! { <p>{*line}</p> }) }
                        </address>
                    </div>
                </div>
                <div class="elegant-border"></div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", year, FIRM_LEGAL_NAME)}</p>
                    <div class="footer-legal">
                        { for LEGAL_LINKS.iter().map(|link| html! {
                            <a href={link.href}>{link.label}</a>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #171717;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 4rem 1rem;
                }
                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }
                .site-footer h3 {
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .site-footer a,
                .site-footer p,
                .site-footer address {
                    color: rgba(255, 255, 255, 0.6);
                    font-style: normal;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .site-footer a:hover {
                    color: #c4a060;
                }
                .elegant-border {
                    height: 1px;
                    margin: 3rem 0;
                    background: linear-gradient(90deg, transparent, rgba(196, 160, 96, 0.4), transparent);
                }
                .footer-bottom {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                }
                .footer-legal {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                }
                @media (min-width: 640px) {
                    .footer-grid { grid-template-columns: repeat(2, 1fr); }
                    .footer-brand { grid-column: span 2; }
                }
                @media (min-width: 768px) {
                    .footer-bottom { flex-direction: row; justify-content: space-between; }
                    .site-footer { padding: 6rem 2rem; }
                }
                @media (min-width: 1024px) {
                    .footer-grid { grid-template-columns: repeat(4, 1fr); gap: 5rem; }
                    .footer-brand { grid-column: span 1; }
                    .footer-inner { padding-left: 8rem; }
                    .site-footer { padding: 8rem 2rem; }
                }
                "#}
            </style>
        </footer>
    }
}
