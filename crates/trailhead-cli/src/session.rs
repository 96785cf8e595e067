//! Line-driven interactive session
//!
//! The session keeps a form open while requests are in flight: fields can be
//! edited and `submit` issued again at any time. State changes published by
//! the controller are rendered as they arrive, and a submit while loading
//! supersedes the earlier request.

use anyhow::Result;
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use trailhead_core::{
    FormField, ItineraryService, SubmissionController, TripForm,
    display::{Notice, SubmissionView},
};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
## Commands

- `set <field> <value>`: replace a field (empty value clears it)
- `show`: preview the request built from the form
- `submit`: send the request; submitting again replaces it
- `status`: show the current state
- `wait`: block until the current request resolves
- `help`: show this list
- `quit`: leave the session

Fields: destination, duration, groupSize, budgetAmount, budgetCurrency,
interests, activities, mustSee, customRequest, fromDate
";

enum Flow {
    Continue,
    Quit,
}

/// An interactive editing session over one controller
pub struct Session<'a, S> {
    controller: &'a SubmissionController<S>,
    renderer: &'a TerminalRenderer,
    form: TripForm,
}

impl<'a, S> Session<'a, S>
where
    S: ItineraryService + 'static,
{
    pub fn new(controller: &'a SubmissionController<S>, renderer: &'a TerminalRenderer) -> Self {
        Self {
            controller,
            renderer,
            form: TripForm::default(),
        }
    }

    /// Process commands until `quit` or end of input.
    ///
    /// At end of input an in-flight request is awaited so its outcome is
    /// still shown.
    pub async fn run<R>(mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut watcher = self.controller.subscribe();
        watcher.current();

        self.renderer.render(HELP)?;

        loop {
            tokio::select! {
                biased;

                alive = watcher.changed() => {
                    if !alive {
                        break;
                    }
                    let view = watcher.current();
                    self.renderer.render(&SubmissionView(&view.state).to_string())?;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        if self.controller.state().is_loading() {
                            let state = self.controller.settled().await;
                            self.renderer.render(&SubmissionView(&state).to_string())?;
                        }
                        break;
                    };
                    if let Flow::Quit = self.handle(&line).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// The value after `set <field> ` is taken verbatim, trailing blanks
    /// included; only the command word and field name are trimmed.
    async fn handle(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim_start();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        debug!("session command: {command}");

        match command {
            "" => {}
            "set" => {
                let rest = rest.trim_start();
                let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
                match name.parse::<FormField>() {
                    Ok(field) => self.form.set(field, value),
                    Err(message) => self.fail(message)?,
                }
            }
            "show" => self.renderer.render(&self.form.to_request().to_string())?,
            "submit" => {
                let id = self.controller.submit(&self.form);
                let notice = Notice::Submitted {
                    id,
                    destination: self.form.get(FormField::Destination),
                };
                self.renderer.render(&notice.to_string())?;
            }
            "status" => {
                let state = self.controller.state();
                self.renderer.render(&SubmissionView(&state).to_string())?;
            }
            "wait" => {
                self.controller.settled().await;
            }
            "help" => self.renderer.render(HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => self.fail(format!("Unknown command: {other}. Type `help` for a list."))?,
        }
        Ok(Flow::Continue)
    }

    fn fail(&self, message: String) -> Result<()> {
        self.renderer.render(&Notice::Rejected(message).to_string())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use trailhead_core::{CostSummary, Result as CoreResult, TripError, TripRequest, TripResponse};

    use super::*;

    /// Answers instantly, echoing the destination into the packing list.
    struct EchoService;

    #[async_trait]
    impl ItineraryService for EchoService {
        async fn generate(&self, request: &TripRequest) -> CoreResult<TripResponse> {
            if request.destination.is_empty() {
                return Err(TripError::Service { status: 422 });
            }
            Ok(TripResponse {
                itinerary: vec![],
                packing_list: vec![format!("Map of {}", request.destination)],
                cost_summary: CostSummary {
                    estimated_total: 0.0,
                    budget: 0.0,
                    packing_list_cost: 0.0,
                    within_budget: true,
                    currency: request.budget_currency.clone(),
                },
                group_size: 1,
            })
        }
    }

    #[tokio::test]
    async fn test_session_edits_and_submits() {
        let controller = SubmissionController::new(EchoService);
        let renderer = TerminalRenderer::new(false);
        let input: &[u8] = b"set destination Lisbon\nset interests food,music\nsubmit\nwait\nquit\n";

        Session::new(&controller, &renderer)
            .run(input)
            .await
            .expect("session failed");

        let response = controller.state().response().cloned().expect("no response");
        assert_eq!(response.packing_list, vec!["Map of Lisbon"]);
    }

    #[tokio::test]
    async fn test_session_awaits_in_flight_request_at_end_of_input() {
        let controller = SubmissionController::new(EchoService);
        let renderer = TerminalRenderer::new(false);
        let input: &[u8] = b"submit\n";

        Session::new(&controller, &renderer).run(input).await.unwrap();

        let failure = controller.state().failure().cloned().expect("expected error");
        assert!(failure.message.contains("422"));
    }

    #[tokio::test]
    async fn test_set_keeps_value_verbatim() {
        let controller = SubmissionController::new(EchoService);
        let renderer = TerminalRenderer::new(false);
        let mut session = Session::new(&controller, &renderer);

        session.handle("set interests art, ").await.unwrap();
        session.handle("  set   mustSee  ").await.unwrap();

        assert_eq!(session.form.get(FormField::Interests), "art, ");
        assert_eq!(session.form.to_request().interests, vec!["art", " "]);
        assert_eq!(session.form.get(FormField::MustSee), " ");
    }

    #[tokio::test]
    async fn test_unknown_field_keeps_session_alive() {
        let controller = SubmissionController::new(EchoService);
        let renderer = TerminalRenderer::new(false);
        let input: &[u8] = b"set hotel Ritz\nbogus\nset currency EUR\nset destination Porto\nsubmit\nwait\n";

        Session::new(&controller, &renderer).run(input).await.unwrap();

        let response = controller.state().response().cloned().unwrap();
        assert_eq!(response.cost_summary.currency, "EUR");
    }
}
