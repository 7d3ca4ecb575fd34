use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, instrument, warn};

use crate::{
    WeatherError,
    fetcher::WeatherFetcher,
    model::{QueryState, ViewModel},
};

/// Sink for rendered UI state. Called once per state transition.
pub trait WeatherView: Send {
    fn render(&mut self, model: &ViewModel);
}

/// Keys the controller reacts to when they arrive from the city input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// What a single submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was made and its result rendered.
    Completed,
    /// Input was empty; no request was made.
    Rejected,
    /// Trigger was disabled (a request is in flight) or the key was not a trigger.
    Ignored,
}

/// Drives a [`WeatherView`] from user input through a [`WeatherFetcher`].
///
/// Neither lock is held while the fetch is awaited, so a concurrent submit
/// sees `Loading` and is dropped rather than queued. A submit that is
/// abandoned mid-fetch (future dropped, fetcher panicked) still leaves the
/// controller in `Failure` with the trigger enabled.
#[derive(Debug)]
pub struct ViewController<F, V> {
    fetcher: F,
    view: Mutex<V>,
    state: Mutex<QueryState>,
}

impl<F, V> ViewController<F, V>
where
    F: WeatherFetcher,
    V: WeatherView,
{
    pub fn new(fetcher: F, view: V) -> Self {
        Self { fetcher, view: Mutex::new(view), state: Mutex::new(QueryState::Idle) }
    }

    pub fn state(&self) -> QueryState {
        self.lock_state().clone()
    }

    /// Handle the submit trigger with the raw contents of the city input.
    #[instrument(skip(self))]
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let city = input.trim();

        {
            let mut state = self.lock_state();
            if state.is_loading() {
                debug!("request in flight, trigger disabled");
                return SubmitOutcome::Ignored;
            }

            if city.is_empty() {
                let message = WeatherError::EmptyInput.user_message();
                self.transition(&mut state, QueryState::Failure(message));
                return SubmitOutcome::Rejected;
            }

            self.transition(&mut state, QueryState::Loading);
        }

        let in_flight = InFlight { controller: self, settled: false };

        let next = match self.fetcher.fetch_weather(city).await {
            Ok(result) => QueryState::Success(result),
            Err(err) => QueryState::Failure(err.user_message()),
        };

        in_flight.settle(next);

        SubmitOutcome::Completed
    }

    /// Handle a key press in the city input. Only Enter submits.
    pub async fn key_pressed(&self, key: Key, input: &str) -> SubmitOutcome {
        match key {
            Key::Enter => self.submit(input).await,
            Key::Other => SubmitOutcome::Ignored,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, QueryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace(&self, next: QueryState) {
        let mut state = self.lock_state();
        self.transition(&mut state, next);
    }

    fn transition(&self, state: &mut QueryState, next: QueryState) {
        *state = next;
        let model = ViewModel::from(&*state);
        self.view.lock().unwrap_or_else(PoisonError::into_inner).render(&model);
    }
}

/// Leaves `Loading` when dropped, whether or not the fetch finished.
struct InFlight<'a, F, V>
where
    F: WeatherFetcher,
    V: WeatherView,
{
    controller: &'a ViewController<F, V>,
    settled: bool,
}

impl<F, V> InFlight<'_, F, V>
where
    F: WeatherFetcher,
    V: WeatherView,
{
    fn settle(mut self, next: QueryState) {
        self.settled = true;
        self.controller.replace(next);
    }
}

impl<F, V> Drop for InFlight<'_, F, V>
where
    F: WeatherFetcher,
    V: WeatherView,
{
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        warn!("weather request abandoned before it completed");
        let err = WeatherError::TransportFailure("request was interrupted".to_string());
        self.controller.replace(QueryState::Failure(err.user_message()));
    }
}
