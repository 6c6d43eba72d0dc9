use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::Insight;
use crate::slug::slugify;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct InsightCardProps {
    pub insight: &'static Insight,
}

#[function_component(InsightCard)]
pub fn insight_card(props: &InsightCardProps) -> Html {
    let insight = props.insight;
    let route = Route::Insight { slug: slugify(insight.title) };
    let tone = if insight.light_mode { "light" } else { "dark" };

    if insight.featured {
        return html! {
            <div class={classes!("insight-card", "featured", tone)}>
                <img src={insight.image} alt={insight.title} />
                <div class="insight-card-shade"></div>
                <div class="insight-card-overlay">
                    <span class="insight-category tag">{insight.category}</span>
                    <Link<Route> to={route}>
                        <h3>{insight.title}</h3>
                    </Link<Route>>
                </div>
            </div>
        };
    }

    html! {
        <div class={classes!("insight-card", tone)}>
            <div class="insight-card-image">
                <img src={insight.image} alt={insight.title} loading="lazy" />
                <div class="insight-card-shade"></div>
            </div>
            <div class="insight-card-meta">
                <span class="insight-category">{insight.category}</span>
                {
                    if let Some(date) = insight.date {
                        html! { <span class="insight-date">{date}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <Link<Route> to={route}>
                <h3>{insight.title}</h3>
            </Link<Route>>
        </div>
    }
}
