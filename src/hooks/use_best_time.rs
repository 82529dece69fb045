use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::optimizer::{AppliancePreset, BestTime};
use crate::models::region::Region;
use crate::services::optimizer_api::fetch_best_time;

#[derive(Clone, PartialEq, Debug)]
pub enum BestTimeState {
    Idle,
    Loading,
    Loaded(Rc<BestTime>),
    Error(String),
}

impl BestTimeState {
    /// Returns true if a query is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, BestTimeState::Loading)
    }

    /// Returns the result if it is loaded
    pub fn data(&self) -> Option<&Rc<BestTime>> {
        match self {
            BestTimeState::Loaded(best) => Some(best),
            _ => None,
        }
    }
}

/// Handle returned by `use_best_time` hook
#[derive(Clone, PartialEq)]
pub struct BestTimeHandle {
    pub state: BestTimeState,
    pub selected: Option<AppliancePreset>,
    pub request: Callback<AppliancePreset>,
}

/// On-demand best-time queries for the given region.
///
/// Rapid re-clicks are sequenced: only the latest request may write the
/// result. Results are cleared whenever the region changes.
#[hook]
pub fn use_best_time(region: Region) -> BestTimeHandle {
    let state = use_state(|| BestTimeState::Idle);
    let selected = use_state(|| None::<AppliancePreset>);
    let request_seq = use_mut_ref(|| 0u64);

    // A best-time window for one region is meaningless in another.
    {
        let state = state.clone();
        let selected = selected.clone();
        let request_seq = request_seq.clone();

        use_effect_with(region, move |_| {
            *request_seq.borrow_mut() += 1;
            state.set(BestTimeState::Idle);
            selected.set(None);
            || ()
        });
    }

    let request = {
        let state = state.clone();
        let selected = selected.clone();
        let request_seq = request_seq.clone();

        Callback::from(move |preset: AppliancePreset| {
            let state = state.clone();
            let request_seq = request_seq.clone();

            selected.set(Some(preset));
            state.set(BestTimeState::Loading);
            *request_seq.borrow_mut() += 1;
            let seq = *request_seq.borrow();

            spawn_local(async move {
                let result = fetch_best_time(&preset, region).await;
                if *request_seq.borrow() != seq {
                    return; // Superseded by a newer request
                }
                match result {
                    Ok(best) => state.set(BestTimeState::Loaded(Rc::new(best))),
                    Err(e) => state.set(BestTimeState::Error(e.to_string())),
                }
            });
        })
    };

    BestTimeHandle {
        state: (*state).clone(),
        selected: *selected,
        request,
    }
}
