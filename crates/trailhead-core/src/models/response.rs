//! The generated itinerary as returned by the service.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TripError};

/// One scheduled activity within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-form time label, usually `HH:MM`
    pub time: String,
    pub description: String,
    /// Per-activity estimate; absent or `null` means no estimate
    #[serde(default)]
    pub estimated_cost: Option<f64>,
}

impl Activity {
    /// Estimated cost, with a missing estimate reading as zero.
    pub fn cost(&self) -> f64 {
        self.estimated_cost.unwrap_or(0.0)
    }
}

/// One day of the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// Day index as numbered by the service, shown as given
    pub day: i64,
    pub summary: String,
    /// Calendar date of the day, when the service assigns one
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub meals: Vec<String>,
    pub activities: Vec<Activity>,
}

/// Cost reconciliation computed by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub estimated_total: f64,
    pub budget: f64,
    #[serde(default)]
    pub packing_list_cost: f64,
    pub within_budget: bool,
    pub currency: String,
}

impl CostSummary {
    /// Whether `within_budget` agrees with the reported totals.
    ///
    /// Rendering never depends on this; it only feeds diagnostics.
    pub fn is_consistent(&self) -> bool {
        self.within_budget == (self.estimated_total <= self.budget)
    }
}

/// A complete, structurally valid answer from the generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    /// Days in trip order
    pub itinerary: Vec<Day>,
    pub packing_list: Vec<String>,
    pub cost_summary: CostSummary,
    /// Group size as echoed (and possibly adjusted) by the service.
    ///
    /// Any JSON integer is accepted: the request carries whatever was typed,
    /// so a negative size can legitimately come back.
    pub group_size: i64,
}

impl TripResponse {
    /// Validate a raw response body.
    ///
    /// # Errors
    ///
    /// Returns `TripError::MalformedResponse` when the body is not JSON or is
    /// missing a required sequence or field.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| TripError::malformed(e.to_string()))
    }

    /// Validate an already decoded payload.
    ///
    /// # Errors
    ///
    /// Returns `TripError::MalformedResponse` on a shape mismatch.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| TripError::malformed(e.to_string()))
    }

    /// Total number of scheduled activities across all days.
    pub fn activity_count(&self) -> usize {
        self.itinerary.iter().map(|day| day.activities.len()).sum()
    }
}
