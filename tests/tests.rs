#[cfg(test)]
mod tests {
    use carbon_dashboard::hooks::use_carbon_data::{CarbonDataHandle, DashboardSlots, SlotsAction};
    use carbon_dashboard::models::{
        error::AppError,
        generation::{GenerationMixEntry, sorted_mix},
        intensity::{Intensity, IntensityIndex, IntensityPeriod},
        optimizer::{
            APPLIANCE_PRESETS, ApplianceRecommendation, RecommendationWindow, window_bounds,
        },
        region::Region,
    };
    use carbon_dashboard::services::api::DashboardData;
    use chrono::{Duration, TimeZone, Utc};
    use std::rc::Rc;
    use yew::prelude::{Callback, Reducible};

    // Helper to build an ordered 48h-style forecast starting at midnight
    fn forecast(len: usize) -> Vec<IntensityPeriod> {
        (0..len)
            .map(|i| {
                let from = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
                    + Duration::minutes(30 * i as i64);
                IntensityPeriod {
                    from,
                    to: from + Duration::minutes(30),
                    intensity: Intensity {
                        forecast: Some(100 + i as u32),
                        actual: None,
                        index: IntensityIndex::Moderate,
                    },
                }
            })
            .collect()
    }

    fn dashboard_data(forecast_len: usize) -> DashboardData {
        let slots = forecast(forecast_len);
        DashboardData {
            current: slots[0].clone(),
            forecast: slots,
            generation_mix: vec![GenerationMixEntry {
                fuel: "wind".to_string(),
                perc: 52.3,
            }],
        }
    }

    fn handle(
        selected_region: Region,
        national: Option<Rc<DashboardData>>,
        regional: Option<Rc<DashboardData>>,
        region_error: Option<String>,
    ) -> CarbonDataHandle {
        CarbonDataHandle {
            regions: Rc::new(vec![Region::National, Region::London, Region::SouthWales]),
            selected_region,
            national,
            regional,
            recommendations: Rc::new(Vec::new()),
            selected_window: None,
            is_loading_region: false,
            is_loading_recommendations: false,
            error: None,
            region_error,
            set_region: Callback::noop(),
            select_window: Callback::noop(),
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_not_found_display() {
        let error = AppError::NotFound("No data for region".to_string());
        assert_eq!(error.to_string(), "Not found: No data for region");
    }

    // ===== Intensity Model Tests =====

    #[test]
    fn test_period_deserialization_with_seconds() {
        let json = r#"{
            "from": "2024-01-20T12:00:00Z",
            "to": "2024-01-20T12:30:00Z",
            "intensity": {"forecast": 266, "actual": 263, "index": "moderate"}
        }"#;

        let period: IntensityPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period.intensity.forecast, Some(266));
        assert_eq!(period.intensity.actual, Some(263));
        assert_eq!(period.intensity.index, IntensityIndex::Moderate);
    }

    #[test]
    fn test_period_deserialization_without_seconds() {
        // Timestamp format as actually returned by the upstream API
        let json = r#"{
            "from": "2026-01-12T19:30Z",
            "to": "2026-01-12T20:00Z",
            "intensity": {"forecast": 142, "index": "very low"}
        }"#;

        let period: IntensityPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period.intensity.actual, None);
        assert_eq!(period.intensity.index, IntensityIndex::VeryLow);
        assert_eq!(period.from.to_rfc3339(), "2026-01-12T19:30:00+00:00");
    }

    #[test]
    fn test_intensity_index_labels() {
        assert_eq!(IntensityIndex::VeryHigh.label(), "Very High");
        assert_eq!(IntensityIndex::Low.css_class(), "intensity-low");
        assert!(IntensityIndex::Moderate.color().starts_with('#'));
    }

    #[test]
    fn test_reading_prefers_actual_over_forecast() {
        let slots = forecast(1);
        assert_eq!(slots[0].intensity.value(), Some(100));

        let mut with_actual = slots[0].clone();
        with_actual.intensity.actual = Some(87);
        assert_eq!(with_actual.intensity.value(), Some(87));
    }

    // ===== Generation Mix Tests =====

    #[test]
    fn test_mix_sorted_descending_with_labels() {
        let mix = vec![
            GenerationMixEntry {
                fuel: "solar".to_string(),
                perc: 4.8,
            },
            GenerationMixEntry {
                fuel: "wind".to_string(),
                perc: 41.2,
            },
        ];

        let sorted = sorted_mix(&mix);
        assert_eq!(sorted[0].fuel, "wind");
        assert_eq!(sorted[0].label(), "Wind (41.2%)");
    }

    // ===== Region Tests =====

    #[test]
    fn test_region_round_trip() {
        for region in Region::all() {
            assert_eq!(
                region.shortname().parse::<Region>().unwrap(),
                *region,
                "shortname should parse back to the same region"
            );
        }
    }

    #[test]
    fn test_region_defaults_and_display() {
        assert_eq!(Region::default(), Region::National);
        assert!(Region::default().is_national());
        assert_eq!(Region::National.display_name(), "UK");
        assert_eq!(Region::SouthWales.display_name(), "South Wales");
    }

    // ===== Optimizer Model Tests =====

    #[test]
    fn test_recommendation_window_camel_case() {
        let json = r#"{
            "appliance": {"name": "Washing Machine", "reason": "Low overnight intensity"},
            "window": {
                "startTime": "2026-03-01T01:00Z",
                "endTime": "2026-03-01T03:00Z",
                "durationMinutes": 120,
                "averageIntensity": 74.0
            }
        }"#;

        let rec: ApplianceRecommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.window.duration_minutes, 120);
        assert_eq!(rec.appliance.icon, None);
    }

    #[test]
    fn test_window_bounds_on_forecast() {
        let slots = forecast(8);
        let window = RecommendationWindow {
            start_time: slots[2].from,
            end_time: slots[4].to,
            duration_minutes: 90,
            average_intensity: 102.0,
        };

        assert_eq!(window_bounds(&slots, &window), Some((2, 4)));

        // A window from a previous region's forecast has no matching slots
        let mut foreign = window.clone();
        foreign.start_time += Duration::minutes(15);
        assert_eq!(window_bounds(&slots, &foreign), None);
    }

    #[test]
    fn test_appliance_presets() {
        assert_eq!(APPLIANCE_PRESETS.len(), 4);
        assert!(APPLIANCE_PRESETS.iter().all(|p| p.duration_minutes > 0));
        assert!(APPLIANCE_PRESETS.iter().all(|p| p.power_kw > 0.0));
    }

    // ===== Display Slot Selection Tests =====

    #[test]
    fn test_national_view_uses_national_slot() {
        let national = Rc::new(dashboard_data(4));
        let h = handle(Region::National, Some(national.clone()), None, None);

        assert_eq!(h.display_data(), Some(&national));
        assert_eq!(h.display_name(), "UK");
    }

    #[test]
    fn test_regional_view_ignores_national_slot() {
        let national = Rc::new(dashboard_data(4));
        let regional = Rc::new(dashboard_data(6));
        let h = handle(
            Region::SouthWales,
            Some(national),
            Some(regional.clone()),
            None,
        );

        assert_eq!(h.display_data(), Some(&regional));
        assert_eq!(h.display_name(), "South Wales");
    }

    #[test]
    fn test_failed_regional_fetch_shows_error_not_stale_data() {
        // Post-switch failure: the regional slot stays null while the region
        // error is populated; national data is untouched but not displayed.
        let national = Rc::new(dashboard_data(4));
        let h = handle(
            Region::London,
            Some(national),
            None,
            Some("Could not fetch data for London.".to_string()),
        );

        assert_eq!(h.display_data(), None);
        assert!(h.region_error.is_some());
    }

    #[test]
    fn test_national_switch_clears_regional_slot() {
        // After switching back to National the hook nulls the regional slot;
        // the handle then serves national data with no region error.
        let national = Rc::new(dashboard_data(4));
        let h = handle(Region::National, Some(national.clone()), None, None);

        assert!(h.regional.is_none());
        assert!(h.region_error.is_none());
        assert_eq!(h.display_data(), Some(&national));
    }

    // ===== Slot Transition Tests =====

    #[test]
    fn test_region_switch_resets_highlight_window() {
        let slots = Rc::new(DashboardSlots {
            national: Some(Rc::new(dashboard_data(4))),
            regional: Some(Rc::new(dashboard_data(6))),
            selected_window: Some(RecommendationWindow {
                start_time: Utc.with_ymd_and_hms(2026, 3, 1, 1, 0, 0).unwrap(),
                end_time: Utc.with_ymd_and_hms(2026, 3, 1, 3, 0, 0).unwrap(),
                duration_minutes: 120,
                average_intensity: 90.0,
            }),
            ..DashboardSlots::default()
        });

        let next = slots.reduce(SlotsAction::RegionChanged(Region::London));

        assert!(next.selected_window.is_none());
        assert!(next.regional.is_none());
        assert!(next.region_error.is_none());
        assert!(next.is_loading_region);
        assert!(next.national.is_some());
    }

    #[test]
    fn test_refresh_updates_only_selected_slot() {
        let slots = Rc::new(DashboardSlots {
            national: Some(Rc::new(dashboard_data(4))),
            regional: Some(Rc::new(dashboard_data(6))),
            ..DashboardSlots::default()
        });

        let next = slots
            .clone()
            .reduce(SlotsAction::Fetched(Region::SouthWales, Ok(dashboard_data(8))));
        assert_eq!(next.national, slots.national);
        assert_eq!(next.regional.as_ref().unwrap().forecast.len(), 8);

        // A failed national refresh keeps the prior national data visible
        let next = slots.reduce(SlotsAction::Fetched(
            Region::National,
            Err(AppError::ApiError("timeout".to_string())),
        ));
        assert!(next.error.is_some());
        assert_eq!(next.national.as_ref().unwrap().forecast.len(), 4);
        assert_eq!(next.regional.as_ref().unwrap().forecast.len(), 6);
    }

    #[test]
    fn test_empty_recommendations_state() {
        let h = handle(Region::SouthWales, None, Some(Rc::new(dashboard_data(4))), None);

        assert!(h.recommendations.is_empty());
        assert!(h.selected_window.is_none());
    }
}
