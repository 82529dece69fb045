use std::rc::Rc;

use gloo_storage::Storage;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::error::AppError;
use crate::models::optimizer::{ApplianceRecommendation, RecommendationWindow};
use crate::models::region::Region;
use crate::services::api::{DashboardData, fetch_dashboard_data, fetch_regions};
use crate::services::optimizer_api::fetch_appliance_recommendations;

/// Everything the dashboard renders, plus the callbacks that mutate it.
///
/// National and per-region data live in separate slots; `display_data`
/// resolves whichever slot the selected region maps to.
#[derive(Clone, PartialEq)]
pub struct CarbonDataHandle {
    pub regions: Rc<Vec<Region>>,
    pub selected_region: Region,
    pub national: Option<Rc<DashboardData>>,
    pub regional: Option<Rc<DashboardData>>,
    pub recommendations: Rc<Vec<ApplianceRecommendation>>,
    pub selected_window: Option<RecommendationWindow>,
    pub is_loading_region: bool,
    pub is_loading_recommendations: bool,
    /// Region list / national fetch failures.
    pub error: Option<String>,
    /// Regional fetch failures, kept apart so they never mask national data.
    pub region_error: Option<String>,
    pub set_region: Callback<Region>,
    pub select_window: Callback<Option<RecommendationWindow>>,
}

impl CarbonDataHandle {
    /// The slot backing the current view.
    pub fn display_data(&self) -> Option<&Rc<DashboardData>> {
        if self.selected_region.is_national() {
            self.national.as_ref()
        } else {
            self.regional.as_ref()
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.selected_region.display_name()
    }
}

/// National and per-region dashboard state, reduced through one action type
/// so the transition and refresh rules live in a single place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSlots {
    pub national: Option<Rc<DashboardData>>,
    pub regional: Option<Rc<DashboardData>>,
    pub error: Option<String>,
    pub region_error: Option<String>,
    pub selected_window: Option<RecommendationWindow>,
    pub is_loading_region: bool,
}

pub enum SlotsAction {
    /// The selection moved to this region.
    RegionChanged(Region),
    /// A dashboard fetch for this region resolved.
    Fetched(Region, Result<DashboardData, AppError>),
    /// A recommendation card was toggled.
    WindowSelected(Option<RecommendationWindow>),
    /// The region list fetch failed.
    RegionsFailed(String),
}

impl Reducible for DashboardSlots {
    type Action = SlotsAction;

    fn reduce(self: Rc<Self>, action: SlotsAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SlotsAction::RegionChanged(region) => {
                // A highlight window and regional data from the previous
                // region are meaningless under the new one.
                next.selected_window = None;
                next.regional = None;
                next.region_error = None;
                next.is_loading_region = !region.is_national();
            }
            SlotsAction::Fetched(region, Ok(data)) => {
                if region.is_national() {
                    next.national = Some(Rc::new(data));
                    next.error = None;
                } else {
                    next.regional = Some(Rc::new(data));
                    next.region_error = None;
                    next.is_loading_region = false;
                }
            }
            SlotsAction::Fetched(region, Err(e)) => {
                // A failed refresh keeps whatever the slot already holds.
                // After a switch the slot is already null, so the error never
                // sits next to another region's data.
                if region.is_national() {
                    next.error = Some(e.to_string());
                } else {
                    next.region_error = Some(e.to_string());
                    next.is_loading_region = false;
                }
            }
            SlotsAction::WindowSelected(window) => next.selected_window = window,
            SlotsAction::RegionsFailed(message) => next.error = Some(message),
        }
        Rc::new(next)
    }
}

/// The fetch a region transition issues. Regional views always load fresh
/// data; the national view only needs one when its slot was never filled.
fn transition_fetch(region: Region, national_loaded: bool) -> Option<Region> {
    if region.is_national() {
        if national_loaded {
            None
        } else {
            Some(Region::National)
        }
    } else {
        Some(region)
    }
}

/// Trigger zero is the mount render. The transition effect owns that fetch,
/// so the first poll tick only arms the timer.
const fn poll_tick_fetches(trigger: u32) -> bool {
    trigger > 0
}

#[hook]
pub fn use_carbon_data() -> CarbonDataHandle {
    let regions = use_state(|| Rc::new(vec![Region::National]));
    let selected_region = use_state(load_region_preference);
    let slots = use_reducer(DashboardSlots::default);
    let recommendations = use_state(|| Rc::new(Vec::<ApplianceRecommendation>::new()));
    let is_loading_recommendations = use_state(|| false);
    let data_trigger = use_state(|| 0u32); // Polling trigger
    let recs_trigger = use_state(|| 0u32);
    // Bumped on every region change; in-flight responses carrying a stale
    // epoch are discarded instead of overwriting the newer selection.
    let fetch_epoch = use_mut_ref(|| 0u64);

    // Region list, once on mount.
    {
        let regions = regions.clone();
        let slots = slots.clone();

        use_effect_with((), move |()| {
            spawn_local(async move {
                match fetch_regions().await {
                    Ok(list) => regions.set(Rc::new(list)),
                    Err(e) => slots.dispatch(SlotsAction::RegionsFailed(format!(
                        "Could not fetch available regions: {e}"
                    ))),
                }
            });

            || () // Cleanup
        });
    }

    // Region transitions own the first load of a view; the polling effect
    // below only refreshes. Declared first so the epoch bump lands before
    // any fetch the same render kicks off.
    {
        let slots = slots.clone();
        let fetch_epoch = fetch_epoch.clone();
        let national_loaded = slots.national.is_some();
        let region_value = *selected_region;

        use_effect_with(region_value, move |region| {
            let region = *region;
            save_region_preference(region);
            *fetch_epoch.borrow_mut() += 1;
            slots.dispatch(SlotsAction::RegionChanged(region));

            if let Some(target) = transition_fetch(region, national_loaded) {
                spawn_local(async move {
                    let epoch = *fetch_epoch.borrow();
                    let result = fetch_dashboard_data(target).await;
                    if *fetch_epoch.borrow() == epoch {
                        slots.dispatch(SlotsAction::Fetched(target, result));
                    }
                });
            }

            || () // Cleanup
        });
    }

    // Periodic refresh of whichever region is selected when the timer fires.
    {
        let slots = slots.clone();
        let selected_region = selected_region.clone();
        let fetch_epoch = fetch_epoch.clone();
        let data_trigger = data_trigger.clone();
        let trigger_value = *data_trigger;

        use_effect_with(trigger_value, move |_| {
            let region = *selected_region;

            spawn_local(async move {
                if poll_tick_fetches(trigger_value) {
                    let epoch = *fetch_epoch.borrow();
                    let result = fetch_dashboard_data(region).await;
                    // A stale response is dropped, the polling chain is not.
                    if *fetch_epoch.borrow() == epoch {
                        slots.dispatch(SlotsAction::Fetched(region, result));
                    }
                }

                // Schedule next poll if enabled
                if Config::ENABLE_AUTO_REFRESH {
                    TimeoutFuture::new(Config::DATA_POLL_INTERVAL_MS).await;
                    data_trigger.set(trigger_value.wrapping_add(1));
                }
            });

            || () // Cleanup
        });
    }

    // Recommendations: re-fetched on region change and on a slow timer.
    {
        let recommendations = recommendations.clone();
        let is_loading_recommendations = is_loading_recommendations.clone();
        let recs_trigger = recs_trigger.clone();
        let trigger_value = *recs_trigger;
        let region_value = *selected_region;

        use_effect_with((trigger_value, region_value), move |(_, region)| {
            let region = *region;
            let aborted = Rc::new(std::cell::Cell::new(false));
            let aborted_check = aborted.clone();

            is_loading_recommendations.set(true);
            recommendations.set(Rc::new(Vec::new())); // Clear old recommendations

            spawn_local(async move {
                let result = fetch_appliance_recommendations(region).await;
                if !aborted_check.get() {
                    is_loading_recommendations.set(false);
                    match result {
                        Ok(recs) => recommendations.set(Rc::new(recs)),
                        Err(e) => {
                            // Rendered as the empty state; no dedicated slot
                            gloo::console::warn!(&format!(
                                "Failed to fetch recommendations: {e}"
                            ));
                            recommendations.set(Rc::new(Vec::new()));
                        }
                    }
                }

                // Schedule next poll if enabled
                if Config::ENABLE_AUTO_REFRESH && !aborted_check.get() {
                    TimeoutFuture::new(Config::RECOMMENDATIONS_POLL_INTERVAL_MS).await;
                    if !aborted_check.get() {
                        recs_trigger.set(trigger_value.wrapping_add(1));
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    let set_region = {
        let selected_region = selected_region.clone();
        Callback::from(move |region| selected_region.set(region))
    };

    let select_window = {
        let slots = slots.clone();
        Callback::from(move |window| slots.dispatch(SlotsAction::WindowSelected(window)))
    };

    CarbonDataHandle {
        regions: (*regions).clone(),
        selected_region: *selected_region,
        national: slots.national.clone(),
        regional: slots.regional.clone(),
        recommendations: (*recommendations).clone(),
        selected_window: slots.selected_window.clone(),
        is_loading_region: slots.is_loading_region,
        is_loading_recommendations: *is_loading_recommendations,
        error: slots.error.clone(),
        region_error: slots.region_error.clone(),
        set_region,
        select_window,
    }
}

/// Load region preference from localStorage
fn load_region_preference() -> Region {
    gloo_storage::LocalStorage::get::<String>("region")
        .ok()
        .and_then(|name| name.parse().ok())
        .unwrap_or_default()
}

/// Save region preference to localStorage
fn save_region_preference(region: Region) {
    if let Err(e) = gloo_storage::LocalStorage::set("region", region.shortname()) {
        gloo::console::warn!(&format!("Failed to save region: {e:?}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::generation::GenerationMixEntry;
    use crate::models::intensity::{Intensity, IntensityIndex, IntensityPeriod};
    use chrono::{Duration, TimeZone, Utc};

    fn data(value: u32) -> DashboardData {
        let from = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let current = IntensityPeriod {
            from,
            to: from + Duration::minutes(30),
            intensity: Intensity {
                forecast: Some(value),
                actual: None,
                index: IntensityIndex::Moderate,
            },
        };
        DashboardData {
            current: current.clone(),
            forecast: vec![current],
            generation_mix: vec![GenerationMixEntry {
                fuel: "wind".to_string(),
                perc: 48.0,
            }],
        }
    }

    fn window() -> RecommendationWindow {
        RecommendationWindow {
            start_time: Utc.with_ymd_and_hms(2026, 3, 1, 1, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2026, 3, 1, 3, 0, 0).unwrap(),
            duration_minutes: 120,
            average_intensity: 88.0,
        }
    }

    fn loaded_slots() -> Rc<DashboardSlots> {
        Rc::new(DashboardSlots {
            national: Some(Rc::new(data(100))),
            regional: Some(Rc::new(data(200))),
            selected_window: Some(window()),
            ..DashboardSlots::default()
        })
    }

    #[test]
    fn test_region_change_clears_regional_state_and_window() {
        let next = loaded_slots().reduce(SlotsAction::RegionChanged(Region::London));

        assert!(next.regional.is_none());
        assert!(next.region_error.is_none());
        assert!(next.selected_window.is_none());
        assert!(next.is_loading_region);
        // The national slot survives untouched
        assert!(next.national.is_some());
    }

    #[test]
    fn test_national_change_clears_without_loading() {
        let next = loaded_slots().reduce(SlotsAction::RegionChanged(Region::National));

        assert!(next.regional.is_none());
        assert!(next.selected_window.is_none());
        assert!(!next.is_loading_region);
    }

    #[test]
    fn test_refresh_writes_only_the_matching_slot() {
        let slots = loaded_slots();

        let next = slots
            .clone()
            .reduce(SlotsAction::Fetched(Region::SouthWales, Ok(data(300))));
        assert_eq!(next.national, slots.national);
        assert_eq!(next.regional.as_ref().unwrap().current.intensity.forecast, Some(300));

        let next = slots.reduce(SlotsAction::Fetched(Region::National, Ok(data(300))));
        assert_eq!(next.national.as_ref().unwrap().current.intensity.forecast, Some(300));
        assert_eq!(next.regional.as_ref().unwrap().current.intensity.forecast, Some(200));
    }

    #[test]
    fn test_failed_refresh_keeps_prior_data() {
        let next = loaded_slots().reduce(SlotsAction::Fetched(
            Region::National,
            Err(AppError::ApiError("timeout".to_string())),
        ));

        assert!(next.error.is_some());
        assert_eq!(next.national.as_ref().unwrap().current.intensity.forecast, Some(100));
    }

    #[test]
    fn test_post_switch_failure_leaves_slot_null() {
        let next = loaded_slots()
            .reduce(SlotsAction::RegionChanged(Region::London))
            .reduce(SlotsAction::Fetched(
                Region::London,
                Err(AppError::NotFound("No data for London".to_string())),
            ));

        assert!(next.regional.is_none());
        assert!(next.region_error.is_some());
        assert!(!next.is_loading_region);
    }

    #[test]
    fn test_single_fetch_per_mount_and_transition() {
        // First render: the transition effect loads the startup region while
        // the trigger-zero poll tick only arms the timer.
        assert_eq!(
            transition_fetch(Region::National, false),
            Some(Region::National)
        );
        assert!(!poll_tick_fetches(0));
        assert!(poll_tick_fetches(1));

        // Returning to a national view that already has data fetches nothing;
        // regional views always load fresh data.
        assert_eq!(transition_fetch(Region::National, true), None);
        assert_eq!(
            transition_fetch(Region::London, true),
            Some(Region::London)
        );
        assert_eq!(
            transition_fetch(Region::London, false),
            Some(Region::London)
        );
    }
}
