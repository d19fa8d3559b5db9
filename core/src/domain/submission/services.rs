use std::{
    io::Read,
    sync::{Mutex, MutexGuard, PoisonError},
};

use tracing::{error, info, warn};

use crate::domain::{
    capture::entities::CapturedImage,
    food_analysis::entities::NutritionAnalysis,
    image::{EncodeError, EncodedImage, encode_reader},
    submission::{
        entities::{ANALYSIS_FAILED_MESSAGE, SubmissionError, UiState},
        ports::AnalysisClient,
    },
};

/// Page-level submission flow. A single loading flag guards the client: a second
/// submission while one is loading is rejected, not queued.
pub struct AnalysisSession<C: AnalysisClient> {
    client: C,
    state: Mutex<UiState>,
}

impl<C: AnalysisClient> AnalysisSession<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: Mutex::new(UiState::default()),
        }
    }

    pub fn state(&self) -> UiState {
        lock(&self.state).clone()
    }

    pub async fn submit(&self, image: &CapturedImage) -> Result<UiState, SubmissionError> {
        let in_flight = self.begin()?;
        Ok(self.run(in_flight, Ok(image.encode())).await)
    }

    /// Same as [`submit`](Self::submit) for a raw source such as an opened file.
    pub async fn submit_source<R: Read>(
        &self,
        source: R,
        mime_type: &str,
    ) -> Result<UiState, SubmissionError> {
        let in_flight = self.begin()?;
        Ok(self.run(in_flight, encode_reader(source, mime_type)).await)
    }

    fn begin(&self) -> Result<InFlight<'_>, SubmissionError> {
        let mut state = lock(&self.state);
        if state.is_loading {
            return Err(SubmissionError::AlreadyInFlight);
        }

        *state = UiState {
            is_loading: true,
            data: None,
            error: None,
        };
        Ok(InFlight {
            state: &self.state,
            settled: false,
        })
    }

    async fn run(
        &self,
        in_flight: InFlight<'_>,
        encoded: Result<EncodedImage, EncodeError>,
    ) -> UiState {
        let outcome = match encoded {
            Ok(image) => self.client.analyze(image).await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match outcome {
            Ok(analysis) => {
                info!(food = %analysis.food_name, calories = analysis.calories, "analysis ready");
                in_flight.settle(Some(analysis))
            }
            Err(reason) => {
                error!("Analysis failed: {}", reason);
                in_flight.settle(None)
            }
        }
    }
}

/// Loading flag of one submission. Dropping it unsettled, e.g. when the
/// submitting future is cancelled, ends the submission as failed.
struct InFlight<'a> {
    state: &'a Mutex<UiState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, data: Option<NutritionAnalysis>) -> UiState {
        self.settled = true;
        let mut state = lock(self.state);
        state.error = match data {
            Some(_) => None,
            None => Some(ANALYSIS_FAILED_MESSAGE.to_string()),
        };
        state.data = data;
        state.is_loading = false;
        state.clone()
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        warn!("analysis abandoned before completion");
        let mut state = lock(self.state);
        state.is_loading = false;
        state.data = None;
        state.error = Some(ANALYSIS_FAILED_MESSAGE.to_string());
    }
}

fn lock(state: &Mutex<UiState>) -> MutexGuard<'_, UiState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
