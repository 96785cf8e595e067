//! Command handlers and their clap argument wrappers
//!
//! Trip fields are taken as raw text, exactly like form inputs: numeric flags
//! are not parsed by clap, so `--duration "a week"` reaches the normalizer
//! unchanged and the service decides what it means.
//!
//! ```text
//! User Input → TripArgs (clap) → TripForm → TripRequest → service
//! ```

use anyhow::{Result, bail};
use clap::Args;
use jiff::Timestamp;
use log::info;
use trailhead_core::{
    FormField, HttpItineraryService, SubmissionController, SubmissionState, TripForm,
    display::{LocalDateTime, SubmissionView},
};

use crate::{renderer::TerminalRenderer, session::Session};

/// Trip constraints as command-line flags
///
/// Every flag is optional; an omitted flag keeps the form default
/// (duration 1, group size 1, budget 0 USD, everything else empty).
#[derive(Args, Debug, Clone, Default)]
pub struct TripArgs {
    /// Where the trip goes
    pub destination: Option<String>,
    /// Trip length in days
    #[arg(long, allow_hyphen_values = true)]
    pub duration: Option<String>,
    /// Number of travellers
    #[arg(short, long, allow_hyphen_values = true)]
    pub group_size: Option<String>,
    /// Total budget amount
    #[arg(short, long = "budget", allow_hyphen_values = true)]
    pub budget_amount: Option<String>,
    /// Three-letter currency code of the budget
    #[arg(short = 'c', long = "currency")]
    pub budget_currency: Option<String>,
    #[arg(
        short,
        long,
        help = "Interests as a comma-separated list, e.g. art,food"
    )]
    pub interests: Option<String>,
    #[arg(
        short,
        long,
        help = "Desired activities as a comma-separated list"
    )]
    pub activities: Option<String>,
    /// Places that must be on the itinerary
    #[arg(short, long)]
    pub must_see: Option<String>,
    /// Any other wishes, in free text
    #[arg(long)]
    pub custom_request: Option<String>,
    /// First day of the trip, YYYY-MM-DD
    #[arg(short, long)]
    pub from_date: Option<String>,
}

impl From<TripArgs> for TripForm {
    fn from(val: TripArgs) -> Self {
        let mut form = TripForm::default();
        let fields = [
            (FormField::Destination, val.destination),
            (FormField::Duration, val.duration),
            (FormField::GroupSize, val.group_size),
            (FormField::BudgetAmount, val.budget_amount),
            (FormField::BudgetCurrency, val.budget_currency),
            (FormField::Interests, val.interests),
            (FormField::Activities, val.activities),
            (FormField::MustSee, val.must_see),
            (FormField::CustomRequest, val.custom_request),
            (FormField::FromDate, val.from_date),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                form.set(field, value);
            }
        }
        form
    }
}

/// Generate an itinerary and render it
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub trip: TripArgs,
    /// Print the service response as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Show the request that would be sent
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub trip: TripArgs,
    /// Print the exact JSON payload instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Render the normalized request without contacting the service.
pub fn preview(renderer: &TerminalRenderer, args: PreviewArgs) -> Result<()> {
    let request = TripForm::from(args.trip).to_request();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&request)?);
        Ok(())
    } else {
        renderer.render(&request.to_string())
    }
}

/// Handlers for commands that talk to the generation service
pub struct Cli {
    controller: SubmissionController<HttpItineraryService>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(
        controller: SubmissionController<HttpItineraryService>,
        renderer: TerminalRenderer,
    ) -> Self {
        Self {
            controller,
            renderer,
        }
    }

    /// Submit once, wait for the outcome and render it.
    ///
    /// A failed submission renders the error banner and then fails the
    /// command so scripts see a non-zero exit status.
    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let form = TripForm::from(args.trip);
        info!(
            "Requesting itinerary for {:?} from {}",
            form.destination,
            self.controller.service().endpoint()
        );

        if !args.json {
            self.renderer
                .render(&SubmissionView(&SubmissionState::Loading).to_string())?;
        }

        let state = self.controller.submit_and_wait(&form).await;
        match &state {
            SubmissionState::Success(response) if args.json => {
                println!("{}", serde_json::to_string_pretty(response)?);
            }
            SubmissionState::Success(_) => {
                self.renderer.render(&SubmissionView(&state).to_string())?;
                self.renderer.render(&format!(
                    "\n*Generated at {}*\n",
                    LocalDateTime(&Timestamp::now())
                ))?;
            }
            SubmissionState::Error(failure) => {
                self.renderer.render(&SubmissionView(&state).to_string())?;
                bail!("itinerary generation failed: {}", failure.message);
            }
            SubmissionState::Idle | SubmissionState::Loading => {
                self.renderer.render(&SubmissionView(&state).to_string())?;
            }
        }
        Ok(())
    }

    /// Run a line-driven session on stdin.
    pub async fn interactive(&self) -> Result<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        Session::new(&self.controller, &self.renderer).run(stdin).await
    }
}
