//! Shared session pipeline: ingested CSV rows -> scored measurement session.
//!
//! Rows the session rejects (missing values, ages outside 0-18, bad values)
//! are collected as row errors so one bad visit never aborts the whole history.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ChildInfo;
use crate::io::ingest::{IngestedMeasurements, RowError};
use crate::reference::ReferenceTableStore;
use crate::session::MeasurementSession;

/// Outputs of a single `growth session` run.
#[derive(Debug, Clone)]
pub struct SessionRun {
    pub session: MeasurementSession,
    /// Ingest and scoring errors together, ordered by CSV line.
    pub row_errors: Vec<RowError>,
}

/// Feed ingested rows through a fresh session for `child`.
pub fn run_session(
    store: Arc<ReferenceTableStore>,
    child: ChildInfo,
    ingested: IngestedMeasurements,
) -> SessionRun {
    let mut session = MeasurementSession::new(store, child);
    let mut row_errors = ingested.row_errors;

    for input in ingested.rows {
        match session.add_measurement(input.date, input.height, input.weight) {
            Ok(m) => debug!(
                line = input.line,
                date = %m.date,
                age = m.age,
                height_sd = m.height_sd,
                weight_sd = m.weight_sd,
                "scored measurement"
            ),
            Err(err) => {
                warn!(line = input.line, error = %err, "measurement skipped");
                row_errors.push(RowError {
                    line: input.line,
                    message: err.to_string(),
                });
            }
        }
    }

    row_errors.sort_by_key(|e| e.line);

    SessionRun {
        session,
        row_errors,
    }
}
