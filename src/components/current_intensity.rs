use yew::prelude::*;

use crate::models::intensity::IntensityPeriod;

#[derive(Properties, PartialEq)]
pub struct CurrentIntensityProps {
    pub reading: Option<IntensityPeriod>,
    pub error: Option<String>,
    pub region_error: Option<String>,
}

/// Hero readout for the current carbon intensity.
#[function_component(CurrentIntensity)]
pub fn current_intensity(props: &CurrentIntensityProps) -> Html {
    let Some(reading) = &props.reading else {
        // Regional errors take precedence only when no global error is set.
        let message = props.error.as_ref().or(props.region_error.as_ref());
        return html! {
            <div class="section-box intensity-box loading-placeholder">
                {
                    match message {
                        Some(msg) => html! { <p class="error-text">{msg}</p> },
                        None => html! { <p>{"Loading current intensity..."}</p> },
                    }
                }
            </div>
        };
    };

    let value = reading
        .intensity
        .value()
        .map_or_else(|| "N/A".to_string(), |v| v.to_string());
    let index = reading.intensity.index;
    let badge_style = format!("background-color: {}", index.color());
    let badge_class = format!("intensity-badge {}", index.css_class());
    let source = if reading.intensity.actual.is_some() {
        "Actual"
    } else {
        "Forecast"
    };

    html! {
        <div class="section-box intensity-box">
            <h2>{"Current Intensity"}</h2>
            <div class="hero-value">{value}</div>
            <div class="hero-unit">{"gCO₂/kWh"}</div>
            <div class={badge_class} style={badge_style}>
                {index.label()}
            </div>
            <p class="intensity-source">{source}</p>
        </div>
    }
}
