use std::rc::Rc;

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::region::Region;

#[derive(Properties, PartialEq)]
pub struct RegionSelectorProps {
    pub regions: Rc<Vec<Region>>,
    pub selected: Region,
    pub display_name: AttrValue,
    pub is_loading: bool,
    pub region_error: Option<String>,
    pub on_change: Callback<Region>,
}

/// Region selector dropdown component
#[function_component(RegionSelector)]
pub fn region_selector(props: &RegionSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(region) = target.value().parse::<Region>() {
                callback.emit(region);
            }
        })
    };

    html! {
        <div class="section-box region-selector-box">
            <h2>{format!("Carbon Intensity ({})", props.display_name)}</h2>
            <div class="region-selector-controls">
                <label for="region-select">{"Select Region:"}</label>
                <select
                    id="region-select"
                    class="region-dropdown"
                    onchange={on_change}
                    disabled={props.is_loading}
                    aria-label="Select electricity region"
                >
                    {
                        props.regions.iter().map(|r| {
                            let name = r.shortname();
                            let selected = *r == props.selected;
                            html! {
                                <option value={name} {selected}>{name}</option>
                            }
                        }).collect::<Html>()
                    }
                </select>
                if props.is_loading {
                    <p class="region-loading">{"Loading region data..."}</p>
                }
                if let Some(err) = &props.region_error {
                    <p class="error-text">{err}</p>
                }
            </div>
        </div>
    }
}
