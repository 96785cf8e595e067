use serde_json::{Value, json};
use trailhead_core::{FormField, TripForm};

/// The Rome request from the planning scenarios.
pub fn rome_form() -> TripForm {
    let mut form = TripForm::default();
    form.set(FormField::Destination, "Rome");
    form.set(FormField::Duration, "3");
    form.set(FormField::GroupSize, "2");
    form.set(FormField::BudgetAmount, "1000");
    form.set(FormField::BudgetCurrency, "USD");
    form.set(FormField::Interests, "art,food");
    form.set(FormField::FromDate, "2025-06-01");
    form
}

/// A three-day answer totalling 850 USD.
pub fn rome_response_body() -> Value {
    json!({
        "itinerary": [
            {
                "day": 1,
                "date": "2025-06-01",
                "summary": "Ancient Rome",
                "meals": ["Breakfast", "Lunch", "Dinner"],
                "activities": [
                    { "time": "09:00", "description": "Colosseum tour", "estimated_cost": 10 },
                    { "time": "19:30", "description": "Dinner in Monti", "estimated_cost": 15 }
                ]
            },
            {
                "day": 2,
                "date": "2025-06-02",
                "summary": "Vatican",
                "meals": ["Breakfast", "Lunch", "Dinner"],
                "activities": [
                    { "time": "08:30", "description": "Vatican Museums", "estimated_cost": 10 },
                    { "time": "16:00", "description": "Walk along the Tiber" }
                ]
            },
            {
                "day": 3,
                "date": "2025-06-03",
                "summary": "Trastevere",
                "meals": ["Breakfast", "Lunch", "Dinner"],
                "activities": [
                    { "time": "10:00", "description": "Market stroll", "estimated_cost": 0 }
                ]
            }
        ],
        "packingList": ["Sunscreen", "Walking shoes", "Adapter"],
        "costSummary": {
            "estimated_total": 850,
            "budget": 1000,
            "packing_list_cost": 6,
            "within_budget": true,
            "currency": "USD"
        },
        "groupSize": 2
    })
}
