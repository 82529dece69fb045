use std::rc::Rc;

use chrono::Local;
use yew::prelude::*;

use crate::models::optimizer::{ApplianceRecommendation, RecommendationWindow};

#[derive(Properties, PartialEq)]
pub struct SmartRecommendationsProps {
    pub recommendations: Rc<Vec<ApplianceRecommendation>>,
    pub is_loading: bool,
    pub selected_window: Option<RecommendationWindow>,
    pub on_select: Callback<Option<RecommendationWindow>>,
}

/// Card grid of per-appliance recommendations. Clicking a card toggles its
/// window as the forecast chart's highlight.
#[function_component(SmartRecommendations)]
pub fn smart_recommendations(props: &SmartRecommendationsProps) -> Html {
    let content = if props.is_loading {
        html! {
            <div class="recommender-loading">
                {"Finding best times for your appliances..."}
            </div>
        }
    } else if props.recommendations.is_empty() {
        html! {
            <div class="recommender-empty">
                {"No optimal energy windows found in the next 48 hours. Check back later!"}
            </div>
        }
    } else {
        html! {
            <div class="recommender-grid">
                {
                    props.recommendations.iter().map(|rec| {
                        let is_active = props
                            .selected_window
                            .as_ref()
                            .is_some_and(|w| w.start_time == rec.window.start_time);
                        html! {
                            <RecommendationCard
                                key={rec.appliance.name.clone()}
                                recommendation={rec.clone()}
                                {is_active}
                                on_select={props.on_select.clone()}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
        }
    };

    html! {
        <div class="section-box recommender-box">
            <h2>{"Smart Recommendations"}</h2>
            {content}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RecommendationCardProps {
    recommendation: ApplianceRecommendation,
    is_active: bool,
    on_select: Callback<Option<RecommendationWindow>>,
}

#[function_component(RecommendationCard)]
fn recommendation_card(props: &RecommendationCardProps) -> Html {
    let appliance = &props.recommendation.appliance;
    let window = &props.recommendation.window;

    let onclick = {
        let on_select = props.on_select.clone();
        let window = window.clone();
        let is_active = props.is_active;
        // Clicking an active card deselects it
        Callback::from(move |_| {
            on_select.emit(if is_active { None } else { Some(window.clone()) });
        })
    };

    let class = if props.is_active {
        "recommendation-card active"
    } else {
        "recommendation-card"
    };
    let accent = appliance.color.as_deref().unwrap_or("#4a5568");
    let style = format!("border-left: 5px solid {accent}");

    let start = window.start_time.with_timezone(&Local).format("%H:%M");
    let end = window.end_time.with_timezone(&Local).format("%H:%M");

    html! {
        <div {class} {style} {onclick}>
            <div class="card-header">
                <span class="card-icon">{icon_for(appliance.icon.as_deref())}</span>
                <h3>{&appliance.name}</h3>
            </div>
            <div class="card-body">
                <p>{&appliance.reason}</p>
            </div>
            <div class="card-footer">
                <div class="info-row">
                    <span class="info-label">{"Best Time:"}</span>
                    <span class="info-value">{format!("{start} - {end}")}</span>
                </div>
                <div class="info-row">
                    <span class="info-label">{"Window Duration:"}</span>
                    <span class="info-value">{format!("{} mins", window.duration_minutes)}</span>
                </div>
                <div class="info-row">
                    <span class="info-label">{"Avg. Intensity:"}</span>
                    <span class="info-value intensity-value">
                        {format!("{:.0} gCO₂/kWh", window.average_intensity)}
                    </span>
                </div>
            </div>
        </div>
    }
}

/// The backend names icons after a JS icon set; map the known ones to glyphs.
fn icon_for(name: Option<&str>) -> &'static str {
    match name {
        Some("FaBolt") => "⚡",
        Some("FaCogs") => "⚙️",
        Some(other) => {
            gloo::console::warn!(&format!("Unknown appliance icon: {other}"));
            "🍃"
        }
        None => "🍃",
    }
}
