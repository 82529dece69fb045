use yew::prelude::*;

use carbon_dashboard::components::{
    CurrentIntensity, ForecastChart, GenerationMixChart, RegionSelector, SmartRecommendations,
    TimeOptimizer,
};
use carbon_dashboard::hooks::use_carbon_data::use_carbon_data;

#[function_component(App)]
fn app() -> Html {
    let data = use_carbon_data();
    let display = data.display_data().cloned();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"UK Carbon Intensity Dashboard"}</h1>
            </header>

            <main class="app-main">
                <RegionSelector
                    regions={data.regions.clone()}
                    selected={data.selected_region}
                    display_name={data.display_name()}
                    is_loading={data.is_loading_region}
                    region_error={data.region_error.clone()}
                    on_change={data.set_region.clone()}
                />

                <div class="top-row">
                    <CurrentIntensity
                        reading={display.as_ref().map(|d| d.current.clone())}
                        error={data.error.clone()}
                        region_error={data.region_error.clone()}
                    />
                    <GenerationMixChart
                        mix={display.as_ref().map(|d| d.generation_mix.clone()).unwrap_or_default()}
                        region_name={data.display_name()}
                    />
                </div>

                <TimeOptimizer
                    region={data.selected_region}
                    disabled={data.is_loading_region}
                />

                <SmartRecommendations
                    recommendations={data.recommendations.clone()}
                    is_loading={data.is_loading_recommendations}
                    selected_window={data.selected_window.clone()}
                    on_select={data.select_window.clone()}
                />

                <ForecastChart
                    slots={display.as_ref().map(|d| d.forecast.clone()).unwrap_or_default()}
                    selected_window={data.selected_window.clone()}
                    region_name={data.display_name()}
                />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
