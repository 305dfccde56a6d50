//! Error types for the appraisal model and report writers

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the financial model and the report writers
#[derive(Debug, Error)]
pub enum ModelError {
    /// IRR does not exist: the cash flows are empty or never change sign
    #[error("IRR is undefined: cash flows have no sign change")]
    IrrNoSignChange,

    /// Both Newton-Raphson and the bisection fallback ran out of iterations
    #[error("IRR is undefined: root solver failed to converge")]
    IrrNonConvergent,

    /// Cumulative cash flow stays negative through the last period
    #[error("payback not reached within the {horizon}-period horizon")]
    PaybackNeverReached { horizon: usize },

    /// Report file could not be created or written
    #[error("failed to write report {}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
