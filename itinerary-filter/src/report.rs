//! Result-set rendering for the console report.

use crate::domain::Itinerary;

/// Renders a result set as text, one itinerary per line.
pub fn render(itineraries: &[Itinerary]) -> String {
    let mut out = String::new();
    for itinerary in itineraries {
        out.push_str(&itinerary.to_string());
        out.push('\n');
    }
    out
}

/// Renders a result set as pretty-printed JSON.
pub fn to_json(itineraries: &[Itinerary]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(itineraries)
}
