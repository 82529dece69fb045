use chrono::Local;
use yew::prelude::*;

use crate::hooks::use_best_time::{BestTimeState, use_best_time};
use crate::models::optimizer::{APPLIANCE_PRESETS, AppliancePreset};
use crate::models::region::Region;

#[derive(Properties, PartialEq)]
pub struct TimeOptimizerProps {
    pub region: Region,
    /// Disabled while the selected region's data is still loading.
    #[prop_or(false)]
    pub disabled: bool,
}

/// Preset buttons querying the optimizer for the greenest run window.
#[function_component(TimeOptimizer)]
pub fn time_optimizer(props: &TimeOptimizerProps) -> Html {
    let best = use_best_time(props.region);

    let is_selected =
        |preset: &AppliancePreset| best.selected.is_some_and(|s| s.name == preset.name);

    html! {
        <div class="section-box optimizer-box">
            <h3>{"Find the Greenest Time for..."}</h3>
            <div class="optimizer-presets">
                {
                    APPLIANCE_PRESETS.iter().map(|preset| {
                        let preset = *preset;
                        let onclick = {
                            let request = best.request.clone();
                            Callback::from(move |_| request.emit(preset))
                        };
                        let class = if is_selected(&preset) {
                            "preset-button active"
                        } else {
                            "preset-button"
                        };
                        let label = if best.state.is_loading() && is_selected(&preset) {
                            "Calculating..."
                        } else {
                            preset.name
                        };

                        html! {
                            <button
                                key={preset.name}
                                {class}
                                {onclick}
                                disabled={best.state.is_loading() || props.disabled}
                            >
                                {label}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>

            {
                match &best.state {
                    BestTimeState::Error(msg) => html! {
                        <div class="optimizer-result">
                            <p class="error-text">{"Error: "}{msg}</p>
                        </div>
                    },
                    BestTimeState::Loaded(result) => {
                        let appliance = best.selected.map_or("appliance", |p| p.name);
                        let start = result.start_time.with_timezone(&Local);
                        html! {
                            <div class="optimizer-result">
                                <p>{"The best time for your "}<strong>{appliance}</strong>{" starts at:"}</p>
                                <div class="result-time">{start.format("%H:%M").to_string()}</div>
                                <p class="result-savings">
                                    {"Estimated saving: "}
                                    <strong>{format!("{}g of CO₂", result.saved_grams_co2)}</strong>
                                </p>
                            </div>
                        }
                    },
                    _ => html! {},
                }
            }
        </div>
    }
}
