use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use senti_core::model::ResultSet;

use crate::error::AnalysisError;
use crate::gateway::{AnalysisGateway, CsvUpload};
use crate::session::SessionService;

/// Runs one analysis upload at a time against the analyze endpoint.
///
/// Concurrency policy: a submit while another request is in flight is
/// rejected with [`AnalysisError::Busy`] and starts nothing; callers treat
/// that as a silent no-op. The in-flight flag is released by an RAII permit
/// on every exit path, so a failed request can always be retried.
pub struct AnalysisService {
    session: Arc<SessionService>,
    gateway: Arc<dyn AnalysisGateway>,
    in_flight: AtomicBool,
}

impl AnalysisService {
    #[must_use]
    pub fn new(session: Arc<SessionService>, gateway: Arc<dyn AnalysisGateway>) -> Self {
        Self {
            session,
            gateway,
            in_flight: AtomicBool::new(false),
        }
    }

    /// True while a request is running.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Upload a CSV and return the full, validated result set.
    ///
    /// # Errors
    ///
    /// `Busy` when a request is already in flight, `NotAuthenticated` when
    /// no token is held, and the gateway's transport, status, or validation
    /// errors otherwise.
    pub async fn analyze(&self, upload: CsvUpload) -> Result<ResultSet, AnalysisError> {
        let _permit = InFlightPermit::acquire(&self.in_flight).ok_or(AnalysisError::Busy)?;

        let token = self
            .session
            .token()
            .ok_or(AnalysisError::NotAuthenticated)?;
        info!(file = %upload.file_name, "starting analysis upload");
        match self.gateway.analyze(&token, upload).await {
            Ok(set) => {
                info!(rows = set.results.len(), "analysis succeeded");
                Ok(set)
            }
            Err(err) => {
                warn!(error = %err, "analysis failed");
                Err(err)
            }
        }
    }
}

/// Checked-and-set guard over the in-flight flag. Releasing happens in
/// `Drop`, which covers early returns and errors alike.
struct InFlightPermit<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightPermit<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightPermit<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
