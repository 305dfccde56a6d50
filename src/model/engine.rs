//! Appraisal engine deriving the cash-flow series and the three metrics

use log::warn;

use super::cashflows::{AppraisalResult, CashFlowSeries, FinancialSummary};
use super::irr::{calculate_irr, calculate_npv};
use crate::assumptions::Assumptions;

/// Capital-budgeting model for a single investment scenario
///
/// A pure function of its assumptions: `compute` touches no external state
/// and returns the same result every run.
pub struct FinancialModel {
    assumptions: Assumptions,
}

impl FinancialModel {
    /// Create a model over the given assumptions
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Run the appraisal
    ///
    /// Derives, in order: total investment, annual revenue, total operating
    /// costs, net annual cash flow, the level cash-flow series, NPV at the
    /// assumed discount rate, IRR, and the payback period. An undefined IRR
    /// or payback is logged and carried as `None` in the summary.
    pub fn compute(&self) -> AppraisalResult {
        let assumptions = &self.assumptions;

        let total_investment = assumptions.investment.total();
        let annual_revenue = assumptions.production.annual_revenue();
        let total_annual_opex = assumptions.operating.total();
        let annual_cash_flow = annual_revenue - total_annual_opex;

        let cash_flows =
            CashFlowSeries::level(total_investment, annual_cash_flow, assumptions.horizon_years);

        let npv = calculate_npv(cash_flows.flows(), assumptions.discount_rate);

        let irr = match calculate_irr(cash_flows.flows()) {
            Ok(rate) => Some(rate),
            Err(e) => {
                warn!("{e}");
                None
            }
        };

        let payback_period = match cash_flows.payback_period() {
            Ok(period) => Some(period),
            Err(e) => {
                warn!("{e}");
                None
            }
        };

        AppraisalResult {
            summary: FinancialSummary {
                total_investment,
                annual_revenue,
                total_annual_opex,
                annual_cash_flow,
                npv,
                irr,
                payback_period,
            },
            cash_flows,
        }
    }

    /// Assumptions backing this model
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }
}
