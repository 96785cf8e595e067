//! Raw form state and the request normalizer.

use std::str::FromStr;

use super::request::{Entered, TripRequest, split_list};

/// Identifies one input field of the trip form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Destination,
    Duration,
    GroupSize,
    BudgetAmount,
    BudgetCurrency,
    Interests,
    Activities,
    MustSee,
    CustomRequest,
    FromDate,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [FormField; 10] = [
        FormField::Destination,
        FormField::Duration,
        FormField::GroupSize,
        FormField::BudgetAmount,
        FormField::BudgetCurrency,
        FormField::Interests,
        FormField::Activities,
        FormField::MustSee,
        FormField::CustomRequest,
        FormField::FromDate,
    ];

    /// Wire name of the field in the request payload
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Destination => "destination",
            FormField::Duration => "duration",
            FormField::GroupSize => "groupSize",
            FormField::BudgetAmount => "budgetAmount",
            FormField::BudgetCurrency => "budgetCurrency",
            FormField::Interests => "interests",
            FormField::Activities => "activities",
            FormField::MustSee => "mustSee",
            FormField::CustomRequest => "customRequest",
            FormField::FromDate => "fromDate",
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    /// Accepts the wire name as well as snake_case and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "destination" => Ok(FormField::Destination),
            "duration" => Ok(FormField::Duration),
            "groupsize" => Ok(FormField::GroupSize),
            "budgetamount" | "budget" => Ok(FormField::BudgetAmount),
            "budgetcurrency" | "currency" => Ok(FormField::BudgetCurrency),
            "interests" => Ok(FormField::Interests),
            "activities" => Ok(FormField::Activities),
            "mustsee" => Ok(FormField::MustSee),
            "customrequest" => Ok(FormField::CustomRequest),
            "fromdate" => Ok(FormField::FromDate),
            _ => Err(format!("Unknown form field: {s}")),
        }
    }
}

/// The trip form as typed: every field is raw text.
///
/// Each [`TripForm::set`] replaces the whole field, so a composite field
/// like interests never keeps tokens from an earlier edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripForm {
    pub destination: String,
    pub duration: String,
    pub group_size: String,
    pub budget_amount: String,
    pub budget_currency: String,
    pub interests: String,
    pub activities: String,
    pub must_see: String,
    pub custom_request: String,
    pub from_date: String,
}

impl Default for TripForm {
    fn default() -> Self {
        Self {
            destination: String::new(),
            duration: "1".to_string(),
            group_size: "1".to_string(),
            budget_amount: "0".to_string(),
            budget_currency: "USD".to_string(),
            interests: String::new(),
            activities: String::new(),
            must_see: String::new(),
            custom_request: String::new(),
            from_date: String::new(),
        }
    }
}

impl TripForm {
    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Destination => &mut self.destination,
            FormField::Duration => &mut self.duration,
            FormField::GroupSize => &mut self.group_size,
            FormField::BudgetAmount => &mut self.budget_amount,
            FormField::BudgetCurrency => &mut self.budget_currency,
            FormField::Interests => &mut self.interests,
            FormField::Activities => &mut self.activities,
            FormField::MustSee => &mut self.must_see,
            FormField::CustomRequest => &mut self.custom_request,
            FormField::FromDate => &mut self.from_date,
        }
    }

    /// Replace the text of one field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Current text of one field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Destination => &self.destination,
            FormField::Duration => &self.duration,
            FormField::GroupSize => &self.group_size,
            FormField::BudgetAmount => &self.budget_amount,
            FormField::BudgetCurrency => &self.budget_currency,
            FormField::Interests => &self.interests,
            FormField::Activities => &self.activities,
            FormField::MustSee => &self.must_see,
            FormField::CustomRequest => &self.custom_request,
            FormField::FromDate => &self.from_date,
        }
    }

    /// Materialize the request payload from the current field values.
    ///
    /// Never fails and never touches the form: numeric fields that do not
    /// parse are carried as text, and comma-delimited fields are split with
    /// [`split_list`].
    pub fn to_request(&self) -> TripRequest {
        TripRequest {
            destination: self.destination.clone(),
            duration: Entered::<i64>::parse(&self.duration),
            group_size: Entered::<i64>::parse(&self.group_size),
            budget_amount: Entered::<f64>::parse(&self.budget_amount),
            budget_currency: self.budget_currency.clone(),
            interests: split_list(&self.interests),
            must_see: self.must_see.clone(),
            custom_request: self.custom_request.clone(),
            from_date: self.from_date.clone(),
            activities: split_list(&self.activities),
        }
    }
}
