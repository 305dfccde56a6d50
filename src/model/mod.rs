//! Appraisal engine and capital-budgeting metrics

mod cashflows;
mod engine;
mod irr;

pub use cashflows::{AppraisalResult, CashFlowRow, CashFlowSeries, FinancialSummary};
pub use engine::FinancialModel;
pub use irr::{calculate_irr, calculate_npv};
