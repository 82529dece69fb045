use serde::{Deserialize, Serialize};

/// One fuel type's share of the generation mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMixEntry {
    pub fuel: String,
    pub perc: f64,
}

impl GenerationMixEntry {
    /// Chart label, e.g. `Wind (34.2%)`.
    pub fn label(&self) -> String {
        let mut chars = self.fuel.chars();
        let capitalised = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
        format!("{} ({}%)", capitalised, self.perc)
    }
}

/// Returns the mix sorted descending by share, so the largest contributors
/// come first and the chart stays stable between refreshes.
pub fn sorted_mix(mix: &[GenerationMixEntry]) -> Vec<GenerationMixEntry> {
    let mut sorted = mix.to_vec();
    sorted.sort_by(|a, b| b.perc.partial_cmp(&a.perc).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}
