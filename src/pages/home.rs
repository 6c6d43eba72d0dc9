use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::{
    footer::Footer,
    header::MainNav,
    insight_card::InsightCard,
    service_card::ServiceCard,
    vertical_logo::VerticalLogo,
};
use crate::config::{
    FIRM_NAME, FIRM_TAGLINE, HERO_FADE_END, HERO_IMAGE_TRAVEL, HERO_PARALLAX_END,
    HERO_TEXT_TRAVEL, LOADING_DELAY_MS,
};
use crate::content::{EXPERTISE, INSIGHTS, SERVICES};
use crate::nav::{NavAction, NavController};
use crate::scroll::{use_scroll, ScrollEvent};
use crate::spring::{use_spring, FRACTION_REST};

/// Hero opacity for a given overall scroll progress.
pub fn hero_opacity(progress: f64) -> f64 {
    (1.0 - progress / HERO_FADE_END).clamp(0.0, 1.0)
}

/// Vertical shift in pixels of the hero background and the hero text.
pub fn hero_parallax(progress: f64) -> (f64, f64) {
    let travelled = (progress / HERO_PARALLAX_END).clamp(0.0, 1.0);
    (travelled * HERO_IMAGE_TRAVEL, travelled * HERO_TEXT_TRAVEL)
}

#[function_component(Home)]
pub fn home() -> Html {
    let nav = use_reducer(NavController::default);
    let loading = use_state(|| true);

    let on_scroll_event = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |event: ScrollEvent| match event {
            ScrollEvent::Initial(offset) => dispatcher.dispatch(NavAction::Resync(offset)),
            ScrollEvent::Scrolled(offset) => dispatcher.dispatch(NavAction::Scroll(offset)),
        })
    };
    let scroll = use_scroll(on_scroll_event);

    let on_manual_reveal = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::ManualReveal))
    };

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(LOADING_DELAY_MS, move || {
                    loading.set(false);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let smooth_progress = use_spring(scroll.progress, FRACTION_REST);
    let opacity = hero_opacity(scroll.progress);
    let (image_y, text_y) = hero_parallax(scroll.progress);

    html! {
        <main class="home">
            {
                if *loading {
                    html! {
                        <div class="loading-overlay">
                            <img src="/logo.svg" alt={FIRM_NAME} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="progress-bar" style={format!("transform: scaleX({:.4});", smooth_progress)}></div>
            <VerticalLogo scroll_y={scroll.offset} />
            <MainNav nav={nav.state()} scroll_y={scroll.offset} on_manual_reveal={on_manual_reveal} />

            <section class="hero">
                <div class="hero-bg" style={format!("transform: translateY({:.1}px);", image_y)}></div>
                <div
                    class="section-inner hero-content"
                    style={format!("opacity: {:.3}; transform: translateY({:.1}px);", opacity, text_y)}
                >
                    <span class="tag">{"LEGAL EXCELLENCE"}</span>
                    <h1>{"Amara "}<span class="accent">{"&"}</span>{" Partners"}</h1>
                    <p class="hero-tagline">{FIRM_TAGLINE}</p>
                    <div class="hero-actions">
                        <a href="/services" class="button primary">{"Our Services"}<span class="arrow">{"→"}</span></a>
                        <a href="/contact-us" class="button outline">{"Contact Us"}</a>
                    </div>
                </div>
                <div class="discover-more" style={format!("opacity: {:.3};", opacity)}>
                    <p>{"Discover More"}</p>
                    <span class="chevron">{"⌄"}</span>
                </div>
            </section>

            <section class="about section-light">
                <div class="section-inner two-col">
                    <div>
                        <h2>{"Exceptional legal services for "}<span class="accent">{"exceptional"}</span>{" clients"}</h2>
                        <div class="elegant-line"></div>
                        <p>{"At Amara & Partners, we understand that legal challenges require not just expertise, but strategic thinking and a deep understanding of your business objectives."}</p>
                        <p>{"Our team of experienced attorneys brings together diverse expertise and a commitment to excellence that sets us apart in Abu Dhabi's legal landscape."}</p>
                        <div class="trusted"><span class="elegant-dot"></span>{"Trusted by industry leaders"}</div>
                    </div>
                    <div class="about-image">
                        <img src="/expertise.jpg" alt="Legal Excellence" loading="lazy" />
                    </div>
                </div>
            </section>

            <section class="services">
                <div class="section-inner">
                    <div class="section-heading">
                        <div>
                            <span class="tag">{"OUR SERVICES"}</span>
                            <h2>{"Legal expertise that delivers results"}</h2>
                            <div class="elegant-line"></div>
                            <p>{"We offer a wide range of specialized legal services tailored to meet the diverse needs of our clients across various industries and sectors."}</p>
                        </div>
                        <a href="/services" class="button outline">{"View all services"}<span class="arrow">{"→"}</span></a>
                    </div>
                    <div class="services-grid">
                        { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <ServiceCard service={service} index={index} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="expertise">
                <div class="section-inner two-col">
                    <div>
                        <span class="tag">{"WHY CHOOSE US"}</span>
                        <h2>{"Unparalleled legal expertise"}</h2>
                        <div class="elegant-line"></div>
                        <p>{"Our team of experienced attorneys brings together diverse expertise and a deep understanding of the legal landscape in Abu Dhabi and beyond."}</p>
                        <div class="expertise-points">
                            { for EXPERTISE.iter().enumerate().map(|(index, point)| html! {
                                <div class="expertise-point" style={format!("animation-delay: {:.1}s;", 0.2 + index as f64 * 0.1)}>
                                    <div class="expertise-number">{(index + 1).to_string()}</div>
                                    <div>
                                        <h3>{point.title}</h3>
                                        <p>{point.description}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <a href="/team" class="button primary">{"Meet Our Team"}<span class="arrow">{"→"}</span></a>
                    </div>
                    <div class="testimonial">
                        <img src="/expertise.jpg" alt="Legal Expertise" loading="lazy" />
                        <blockquote>
                            <p>{"\"Amara & Partners provided exceptional legal counsel that was both strategic and practical.\""}</p>
                            <cite>{"— CEO, International Finance Group"}</cite>
                        </blockquote>
                    </div>
                </div>
            </section>

            <section class="insights section-light">
                <div class="section-inner">
                    <div class="section-heading">
                        <div>
                            <span class="tag">{"INSIGHTS"}</span>
                            <h2>{"Spotlight on our news and insights"}</h2>
                            <div class="elegant-line"></div>
                        </div>
                        <a href="/insights" class="button outline">{"VIEW ALL INSIGHTS"}<span class="arrow">{"→"}</span></a>
                    </div>
                    <div class="insights-grid">
                        { for INSIGHTS.iter().map(|insight| html! {
                            <div class={classes!(insight.featured.then(|| "span-full"))}>
                                <InsightCard insight={insight} />
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="cta">
                <div class="section-inner">
                    <div class="cta-box">
                        <h2>{"Ready to work with us?"}</h2>
                        <div class="elegant-line"></div>
                        <p>{"Contact our team today to discuss how Amara & Partners can provide the legal expertise your business needs."}</p>
                        <a href="/contact-us" class="button primary">{"Contact Us"}<span class="arrow">{"→"}</span></a>
                    </div>
                </div>
            </section>

            <Footer />
            <style>
                {r#"
                .home {
                    position: relative;
                    overflow: hidden;
                    background: #0f0f11;
                    color: #f5f5f5;
                }
                .loading-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #c4a060;
                }
                .loading-overlay img {
                    height: 5rem;
                    animation: fadeIn 0.4s ease-out;
                }
                .progress-bar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 2px;
                    z-index: 45;
                    background: #c4a060;
                    transform-origin: 0% 50%;
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 8rem 1rem;
                }
                .two-col {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .section-light {
                    background: #f7f5f0;
                    color: #171717;
                }
                .accent {
                    color: #c4a060;
                }
                .tag {
                    display: inline-block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #c4a060;
                    padding: 0.375rem 1.5rem;
                    border-left: 1px solid #c4a060;
                    margin-bottom: 1.5rem;
                }
                .elegant-line {
                    width: 4rem;
                    height: 1px;
                    margin: 2rem 0;
                    background: #c4a060;
                }
                .elegant-dot {
                    display: inline-block;
                    width: 8px;
                    height: 8px;
                    margin-right: 1rem;
                    border-radius: 50%;
                    background: #c4a060;
                }
                .button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1.25rem 2.5rem;
                    text-decoration: none;
                }
                .button.primary {
                    background: #c4a060;
                    color: #fff;
                }
                .button.outline {
                    border: 1px solid rgba(196, 160, 96, 0.3);
                    color: inherit;
                }
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .hero-bg {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    opacity: 0.3;
                    background: url('/hero-bg.jpg') center / cover;
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                }
                .hero h1 {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 700;
                    margin: 0 0 3rem;
                }
                .hero-tagline {
                    font-size: 1.5rem;
                    font-weight: 300;
                    max-width: 42rem;
                    color: rgba(255, 255, 255, 0.9);
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .discover-more {
                    position: absolute;
                    bottom: 3rem;
                    left: 50%;
                    transform: translateX(-50%);
                    text-align: center;
                    color: rgba(255, 255, 255, 0.6);
                }
                .chevron {
                    display: block;
                    color: #c4a060;
                    animation: bounce 1.5s infinite;
                }
                @keyframes bounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(10px); }
                }
                .about-image img,
                .testimonial img {
                    width: 100%;
                    object-fit: cover;
                }
                .services {
                    background: #1a1a1d;
                }
                .section-heading {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    gap: 3rem;
                    margin-bottom: 4rem;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }
                .service-card {
                    animation: riseIn 0.6s ease-out both;
                }
                .service-card-image {
                    position: relative;
                    aspect-ratio: 3 / 2;
                    overflow: hidden;
                }
                .service-card-image img,
                .insight-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .service-card:hover img,
                .insight-card:hover img {
                    transform: scale(1.05);
                }
                .service-card-shade,
                .insight-card-shade {
                    position: absolute;
                    inset: 0;
                    background: rgba(23, 23, 23, 0.5);
                }
                .service-card-body {
                    padding: 2.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-top: none;
                }
                .service-card-link {
                    color: #c4a060;
                    text-decoration: none;
                }
                .arrow {
                    margin-left: 0.75rem;
                }
                @keyframes riseIn {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .expertise-points {
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                    padding: 1.5rem 0 2rem;
                }
                .expertise-point {
                    display: flex;
                    gap: 1.5rem;
                    animation: riseIn 0.5s ease-out both;
                }
                .expertise-number {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid rgba(196, 160, 96, 0.4);
                    background: rgba(196, 160, 96, 0.1);
                }
                .testimonial {
                    position: relative;
                }
                .testimonial blockquote {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    margin: 0;
                    padding: 2rem;
                    font-style: italic;
                }
                .testimonial cite {
                    display: block;
                    margin-top: 1rem;
                    color: #c4a060;
                    font-style: normal;
                }
                .insights-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }
                .insight-card {
                    position: relative;
                }
                .insight-card-image {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                }
                .insight-card.featured {
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                }
                .insight-card-overlay {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    padding: 3rem;
                    max-width: 48rem;
                }
                .insight-card-meta {
                    display: flex;
                    justify-content: space-between;
                    margin: 2rem 0 1rem;
                }
                .insight-category {
                    color: #c4a060;
                    font-size: 0.875rem;
                }
                .insight-date {
                    font-size: 0.875rem;
                    color: #737373;
                }
                .insight-card a {
                    color: inherit;
                    text-decoration: none;
                }
                .insight-card.dark h3,
                .insight-card.featured h3 {
                    color: #fff;
                }
                .cta-box {
                    padding: 2rem;
                    border: 1px solid rgba(196, 160, 96, 0.2);
                    background: rgba(196, 160, 96, 0.05);
                }
                @media (min-width: 768px) {
                    .services-grid { grid-template-columns: repeat(2, 1fr); }
                    .section-heading { flex-direction: row; align-items: flex-end; }
                    .cta-box { padding: 4rem; }
                }
                @media (min-width: 1024px) {
                    .section-inner { padding: 10rem 2rem 10rem 8rem; }
                    .two-col { grid-template-columns: 1fr 1fr; gap: 5rem; }
                    .services-grid { grid-template-columns: repeat(3, 1fr); }
                    .insights-grid { grid-template-columns: 1fr 1fr; gap: 5rem; }
                    .span-full { grid-column: span 2; }
                    .cta-box { padding: 6rem; }
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_fades_over_first_quarter() {
        assert_eq!(hero_opacity(0.0), 1.0);
        assert!((hero_opacity(0.125) - 0.5).abs() < 1e-9);
        assert_eq!(hero_opacity(0.25), 0.0);
        assert_eq!(hero_opacity(0.9), 0.0);
    }

    #[test]
    fn parallax_moves_image_down_and_text_up_until_halfway() {
        assert_eq!(hero_parallax(0.0), (0.0, 0.0));
        assert_eq!(hero_parallax(0.25), (75.0, -25.0));
        assert_eq!(hero_parallax(0.5), (150.0, -50.0));
        assert_eq!(hero_parallax(1.0), (150.0, -50.0));
        assert_eq!(hero_parallax(-0.1), (0.0, 0.0));
    }
}
