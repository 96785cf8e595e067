//! Display implementations for the generated itinerary.
//!
//! Rendering is a pure function of the response: days and packing items are
//! written in the order the service returned them, and the budget verdict
//! comes from `within_budget` alone, never from the itemized numbers.

use std::fmt;

use crate::models::{Activity, CostSummary, Day, TripResponse};

/// Formats a money amount: whole numbers without decimals, otherwise two.
pub struct Amount(pub f64);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

/// One activity bullet, priced in the summary currency.
struct ActivityLine<'a> {
    activity: &'a Activity,
    currency: &'a str,
}

impl fmt::Display for ActivityLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} – {} ({} {})",
            self.activity.time,
            self.activity.description,
            Amount(self.activity.cost()),
            self.currency
        )
    }
}

fn fmt_day(day: &Day, currency: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "## Day {}: {}", day.day, day.summary)?;
    writeln!(f)?;

    if day.date.is_some() || !day.meals.is_empty() {
        if let Some(date) = &day.date {
            writeln!(f, "- **Date**: {date}")?;
        }
        if !day.meals.is_empty() {
            writeln!(f, "- **Meals**: {}", day.meals.join(", "))?;
        }
        writeln!(f)?;
    }

    if day.activities.is_empty() {
        writeln!(f, "No activities scheduled.")?;
    } else {
        for activity in &day.activities {
            write!(f, "{}", ActivityLine { activity, currency })?;
        }
    }
    writeln!(f)
}

impl fmt::Display for CostSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Total: {} {}", Amount(self.estimated_total), self.currency)?;
        writeln!(f, "- Budget: {} {}", Amount(self.budget), self.currency)?;
        writeln!(
            f,
            "- Packing list: {} {}",
            Amount(self.packing_list_cost),
            self.currency
        )?;
        writeln!(
            f,
            "- Within Budget: {}",
            if self.within_budget { "✅ Yes" } else { "❌ No" }
        )
    }
}

impl fmt::Display for TripResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let currency = self.cost_summary.currency.as_str();

        writeln!(f, "# Itinerary")?;
        writeln!(f)?;
        if self.itinerary.is_empty() {
            writeln!(f, "No days planned.")?;
            writeln!(f)?;
        } else {
            for day in &self.itinerary {
                fmt_day(day, currency, f)?;
            }
        }

        writeln!(f, "# Packing List")?;
        writeln!(f)?;
        if self.packing_list.is_empty() {
            writeln!(f, "Nothing to pack.")?;
        } else {
            for item in &self.packing_list {
                writeln!(f, "- {item}")?;
            }
        }
        writeln!(f)?;

        writeln!(f, "# Cost Summary")?;
        writeln!(f)?;
        writeln!(f, "- Group size: {}", self.group_size)?;
        write!(f, "{}", self.cost_summary)
    }
}
