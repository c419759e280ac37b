//! Recommendation submitter
//!
//! [`Submitter::submit`] is the whole click handler: validate, mark the
//! trigger busy, call the service once, show the result or an alert, archive
//! the crops, and release the busy state on every path. The HTTP client, UI
//! and history storage are injected so each front-end supplies its own.

use crate::display::{compute_display_model, RecommendationView};
use crate::error::{SubmitError, SubmitResult};
use crate::history::{Clock, HistoryRepository, HistoryStore, HistoryView};
use crate::models::{
    service_error_message, FormFields, FormInput, RecommendationResult, ServiceResponse,
};
use crate::validation::validate_form;

/// Client for the external recommendation endpoint
///
/// Implementations issue exactly one POST with every parameter in the query
/// string (see [`FormInput::query_pairs`]) and no body. Network failures and
/// unreadable bodies come back as [`SubmitError::Transport`].
#[allow(async_fn_in_trait)]
pub trait RecommendationClient {
    async fn recommend(&self, input: &FormInput) -> SubmitResult<ServiceResponse>;
}

impl<T: RecommendationClient + ?Sized> RecommendationClient for &T {
    async fn recommend(&self, input: &FormInput) -> SubmitResult<ServiceResponse> {
        (**self).recommend(input).await
    }
}

/// UI surface touched by a submission
pub trait SubmitUi {
    /// Disable or re-enable the trigger, swapping its label and style
    fn set_busy(&self, busy: bool);

    /// Blocking message to the user
    fn alert(&self, message: &str);

    /// Reveal the result panel and fill it
    fn show_recommendation(&self, view: &RecommendationView);
}

impl<T: SubmitUi + ?Sized> SubmitUi for &T {
    fn set_busy(&self, busy: bool) {
        (**self).set_busy(busy)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn show_recommendation(&self, view: &RecommendationView) {
        (**self).show_recommendation(view)
    }
}

/// Holds the busy state for its lifetime
pub struct BusyGuard<'a, U: SubmitUi + ?Sized> {
    ui: &'a U,
}

impl<'a, U: SubmitUi + ?Sized> BusyGuard<'a, U> {
    pub fn acquire(ui: &'a U) -> Self {
        ui.set_busy(true);
        Self { ui }
    }
}

impl<U: SubmitUi + ?Sized> Drop for BusyGuard<'_, U> {
    fn drop(&mut self) {
        self.ui.set_busy(false);
    }
}

/// Submits the form and archives successful results
pub struct Submitter<Cl, R, C> {
    client: Cl,
    history: HistoryStore<R, C>,
}

impl<Cl, R, C> Submitter<Cl, R, C>
where
    Cl: RecommendationClient,
    R: HistoryRepository,
    C: Clock,
{
    pub fn new(client: Cl, history: HistoryStore<R, C>) -> Self {
        Self { client, history }
    }

    pub fn history(&self) -> &HistoryStore<R, C> {
        &self.history
    }

    /// Handle one click on the trigger
    ///
    /// A validation failure alerts without touching the busy state or the
    /// network. Otherwise the busy state is held until after the result is
    /// shown or the alert is dismissed.
    pub async fn submit(
        &self,
        fields: &FormFields,
        ui: &impl SubmitUi,
        history_view: &impl HistoryView,
    ) -> SubmitResult<RecommendationView> {
        let input = match validate_form(fields) {
            Ok(input) => input,
            Err(e) => {
                let error = SubmitError::from(e);
                ui.alert(&error.alert_message());
                return Err(error);
            }
        };

        let _busy = BusyGuard::acquire(ui);

        match self.request(&input).await {
            Ok(result) => {
                let view = compute_display_model(&result);
                ui.show_recommendation(&view);
                if let Err(e) = self.history.record(&result.top_3_crops, history_view) {
                    tracing::warn!("Failed to save history: {}", e);
                }
                Ok(view)
            }
            Err(e) => {
                tracing::debug!("Recommendation failed: {}", e);
                ui.alert(&e.alert_message());
                Err(e)
            }
        }
    }

    /// Call the service once and split off explicit failures
    async fn request(&self, input: &FormInput) -> SubmitResult<RecommendationResult> {
        tracing::debug!(city = %input.location, month = %input.month, "Requesting recommendation");

        match self.client.recommend(input).await? {
            ServiceResponse::Failure { error } => {
                Err(SubmitError::Service(service_error_message(&error)))
            }
            ServiceResponse::Success(result) => Ok(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::history::{InMemoryHistoryRepository, RecordingHistoryView};
    use crate::models::{CropPrediction, WeatherSummary};

    #[derive(Default)]
    struct FakeUi {
        events: RefCell<Vec<String>>,
    }

    impl SubmitUi for FakeUi {
        fn set_busy(&self, busy: bool) {
            self.events.borrow_mut().push(format!("busy:{}", busy));
        }

        fn alert(&self, message: &str) {
            self.events.borrow_mut().push(format!("alert:{}", message));
        }

        fn show_recommendation(&self, view: &RecommendationView) {
            self.events.borrow_mut().push(format!("show:{}", view.headline));
        }
    }

    struct FixedClient(fn() -> SubmitResult<ServiceResponse>);

    impl RecommendationClient for FixedClient {
        async fn recommend(&self, _input: &FormInput) -> SubmitResult<ServiceResponse> {
            (self.0)()
        }
    }

    fn success() -> SubmitResult<ServiceResponse> {
        Ok(ServiceResponse::Success(RecommendationResult {
            top_3_crops: [
                CropPrediction::new("rice", 0.9),
                CropPrediction::new("maize", 0.05),
                CropPrediction::new("jute", 0.05),
            ],
            weather: WeatherSummary {
                temperature: 25.0,
                humidity: 70.0,
                rainfall: 100.0,
            },
        }))
    }

    fn fields() -> FormFields {
        FormFields {
            location: "Pune".into(),
            month: "July".into(),
            n: "90".into(),
            p: "42".into(),
            k: "43".into(),
        }
    }

    #[test]
    fn test_alert_happens_before_busy_release() {
        let submitter = Submitter::new(
            FixedClient(|| Ok(ServiceResponse::Failure { error: "City not found".into() })),
            HistoryStore::new(InMemoryHistoryRepository::new(), || "now".to_string()),
        );
        let ui = FakeUi::default();

        let result = tokio_test::block_on(submitter.submit(
            &fields(),
            &ui,
            &RecordingHistoryView::default(),
        ));

        assert_eq!(result, Err(SubmitError::Service("City not found".into())));
        assert_eq!(
            *ui.events.borrow(),
            ["busy:true", "alert:City not found", "busy:false"]
        );
    }

    #[test]
    fn test_success_shows_then_releases() {
        let submitter = Submitter::new(
            FixedClient(success),
            HistoryStore::new(InMemoryHistoryRepository::new(), || "now".to_string()),
        );
        let ui = FakeUi::default();
        let view = RecordingHistoryView::default();

        let result = tokio_test::block_on(submitter.submit(&fields(), &ui, &view)).unwrap();

        assert_eq!(result.headline, "🌱 rice");
        assert_eq!(*ui.events.borrow(), ["busy:true", "show:🌱 rice", "busy:false"]);
        assert_eq!(submitter.history().load().len(), 1);
        assert_eq!(view.shown.borrow().len(), 1);
    }
}
