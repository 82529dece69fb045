use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        MarkArea, MarkAreaData, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::intensity::{IntensityPeriod, series_data};
use crate::models::optimizer::{RecommendationWindow, window_bounds};
use crate::utils::resize::on_resize_settled;

const CHART_ID: &str = "forecast-chart";

#[derive(Properties, PartialEq)]
pub struct ForecastChartProps {
    pub slots: Vec<IntensityPeriod>,
    pub selected_window: Option<RecommendationWindow>,
    pub region_name: AttrValue,
}

/// 48-hour intensity forecast line, with the selected recommendation window
/// shaded when both of its boundaries fall on slot boundaries.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &ForecastChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = use_memo(props.slots.clone(), |slots| series_data(slots));
    let region_name = props.region_name.to_string();

    // Map the selected window onto category-axis labels.
    let highlight = props.selected_window.as_ref().and_then(|window| {
        let (start, end) = window_bounds(&props.slots, window)?;
        let (labels, _) = &*series;
        Some((labels[start].clone(), labels[end].clone()))
    });

    {
        let container_ref = container_ref.clone();
        let series = series.clone();
        let highlight = highlight.clone();
        let region_name = region_name.clone();

        use_effect_with(
            (series, highlight, container_ref, region_name),
            |(series, highlight, container_ref, region_name)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, series, highlight.as_ref(), region_name);

                    let series = series.clone();
                    let highlight = highlight.clone();
                    let region_name = region_name.clone();
                    on_resize_settled(
                        move || render_chart(&container, &series, highlight.as_ref(), &region_name),
                        150,
                    )
                });

                move || drop(listener)
            },
        );
    }

    if props.slots.is_empty() {
        return html! {
            <div class="section-box chart-loading">
                <p>{"Loading forecast chart..."}</p>
            </div>
        };
    }

    html! {
        <div class="section-box forecast-chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(
    container: &HtmlElement,
    series: &(Vec<String>, Vec<f64>),
    highlight: Option<&(String, String)>,
    region_name: &str,
) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series, highlight, region_name);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        gloo::console::error!(&format!("Render error: {e:?}"));
    }
}

fn build_chart(
    series: &(Vec<String>, Vec<f64>),
    highlight: Option<&(String, String)>,
    region_name: &str,
) -> CharmingChart {
    let (x_data, y_data) = series;

    let mut line = Line::new()
        .name("Carbon Intensity Forecast (gCO₂/kWh)")
        .smooth(0.4)
        .data(y_data.clone());

    if let Some((start_label, end_label)) = highlight {
        line = line.mark_area(
            MarkArea::new()
                .item_style(ItemStyle::new().color("rgba(99, 179, 237, 0.2)"))
                .data(vec![(
                    MarkAreaData::new().x_axis(start_label.as_str()),
                    MarkAreaData::new().x_axis(end_label.as_str()),
                )]),
        );
    }

    CharmingChart::new()
        .title(
            Title::new()
                .text(format!("{region_name} 48-Hour Carbon Intensity Forecast"))
                .left("center")
                .text_style(TextStyle::new().font_size(16).color("#f0f0f0")),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data.clone())
                .axis_label(AxisLabel::new().rotate(45).color("#a9a9a9").interval(7)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("gCO₂/kWh")
                .axis_label(AxisLabel::new().color("#a9a9a9"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#404040")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(line)
}
