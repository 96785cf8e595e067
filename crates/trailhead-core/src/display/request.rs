//! Display of the normalized request, for previews before submitting.

use std::fmt;

use crate::models::{Entered, TripRequest};

impl<T: fmt::Display> fmt::Display for Entered<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entered::Value(v) => write!(f, "{v}"),
            Entered::Raw(raw) => write!(f, "{raw:?}"),
        }
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

fn text_or_none(text: &str) -> &str {
    if text.is_empty() { "(none)" } else { text }
}

impl fmt::Display for TripRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Trip Request")?;
        writeln!(f)?;
        writeln!(f, "- **Destination**: {}", text_or_none(&self.destination))?;
        writeln!(f, "- **Duration**: {} days", self.duration)?;
        writeln!(f, "- **Group size**: {}", self.group_size)?;
        writeln!(f, "- **Budget**: {} {}", self.budget_amount, self.budget_currency)?;
        writeln!(f, "- **From**: {}", text_or_none(&self.from_date))?;
        writeln!(f, "- **Interests**: {}", list_or_none(&self.interests))?;
        writeln!(f, "- **Activities**: {}", list_or_none(&self.activities))?;
        writeln!(f, "- **Must see**: {}", text_or_none(&self.must_see))?;
        writeln!(f, "- **Custom request**: {}", text_or_none(&self.custom_request))
    }
}
