use charming::{
    Chart as CharmingChart,
    component::Title,
    element::{TextStyle, Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Pie,
};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::generation::{GenerationMixEntry, sorted_mix};
use crate::utils::resize::on_resize_settled;

const CHART_ID: &str = "mix-chart";

#[derive(Properties, PartialEq)]
pub struct GenerationMixChartProps {
    pub mix: Vec<GenerationMixEntry>,
    pub region_name: AttrValue,
}

/// Pie breakdown of the current generation mix.
#[function_component(GenerationMixChart)]
pub fn generation_mix_chart(props: &GenerationMixChartProps) -> Html {
    let container_ref = use_node_ref();
    let sorted = use_memo(props.mix.clone(), |mix| sorted_mix(mix));
    let region_name = props.region_name.to_string();

    {
        let container_ref = container_ref.clone();
        let sorted = sorted.clone();
        let region_name = region_name.clone();

        use_effect_with(
            (sorted, container_ref, region_name),
            |(sorted, container_ref, region_name)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, sorted, region_name);

                    let sorted = sorted.clone();
                    let region_name = region_name.clone();
                    on_resize_settled(
                        move || render_chart(&container, &sorted, &region_name),
                        150,
                    )
                });

                move || drop(listener)
            },
        );
    }

    if props.mix.is_empty() {
        return html! {
            <div class="section-box chart-loading">
                <p>{"Loading generation mix..."}</p>
            </div>
        };
    }

    html! {
        <div class="section-box mix-chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, mix: &[GenerationMixEntry], region_name: &str) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 || mix.is_empty() {
        return;
    }

    let chart = build_chart(mix, region_name);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        gloo::console::error!(&format!("Render error: {e:?}"));
    }
}

fn build_chart(mix: &[GenerationMixEntry], region_name: &str) -> CharmingChart {
    let labels: Vec<String> = mix.iter().map(GenerationMixEntry::label).collect();
    let data: Vec<(f64, &str)> = mix
        .iter()
        .zip(labels.iter())
        .map(|(entry, label)| (entry.perc, label.as_str()))
        .collect();

    CharmingChart::new()
        .title(
            Title::new()
                .text(format!("Current {region_name} Generation Mix"))
                .left("center")
                .text_style(TextStyle::new().font_size(16).color("#f0f0f0")),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .series(
            Pie::new()
                .name("Generation Mix")
                .radius(vec!["35%", "65%"])
                .center(vec!["50%", "55%"])
                .data(data),
        )
}
