use crate::error::PickError;
use std::path::PathBuf;
use std::sync::Arc;

/// Terminal outcome of a pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickedResult {
    /// One or more picked files
    Success(Vec<PathBuf>),
    Error(PickError),
}

impl PickedResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PickedResult::Success(_))
    }

    pub fn into_result(self) -> Result<Vec<PathBuf>, PickError> {
        match self {
            PickedResult::Success(paths) => Ok(paths),
            PickedResult::Error(e) => Err(e),
        }
    }
}

impl From<Result<Vec<PathBuf>, PickError>> for PickedResult {
    fn from(result: Result<Vec<PathBuf>, PickError>) -> Self {
        match result {
            Ok(paths) => PickedResult::Success(paths),
            Err(e) => PickedResult::Error(e),
        }
    }
}

/// Receives every outcome once a flow has been started
pub type ResultCallback = Arc<dyn Fn(PickedResult) + Send + Sync>;

/// Receives failures raised before any flow could be started
pub type ErrorCallback = Arc<dyn Fn(PickError) + Send + Sync>;

/// The pair of callbacks handed to every flow.
///
/// [`deliver`](Self::deliver) is the single funnel for terminal outcomes;
/// platform flows and the dispatcher both go through it.
#[derive(Clone)]
pub struct PickCallbacks {
    on_result: ResultCallback,
    on_error: ErrorCallback,
}

impl PickCallbacks {
    pub fn new(on_result: ResultCallback, on_error: ErrorCallback) -> Self {
        Self {
            on_result,
            on_error,
        }
    }

    /// Hand a terminal outcome to the caller
    pub fn deliver(&self, result: PickedResult) {
        if cfg!(debug_assertions) {
            if let PickedResult::Error(e) = &result {
                log::error!("Image pick failed: {}", e);
            }
        }
        (self.on_result)(result);
    }

    pub fn deliver_paths(&self, paths: Vec<PathBuf>) {
        self.deliver(PickedResult::Success(paths));
    }

    pub fn deliver_error(&self, error: PickError) {
        self.deliver(PickedResult::Error(error));
    }

    /// Report a failure that kept a flow from starting
    pub fn report_start_failure(&self, error: PickError) {
        if cfg!(debug_assertions) {
            log::warn!("Could not start image pick flow: {}", error);
        }
        (self.on_error)(error);
    }
}

impl std::fmt::Debug for PickCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickCallbacks").finish_non_exhaustive()
    }
}
