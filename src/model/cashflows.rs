//! Cash-flow series and appraisal output structures

use serde::Serialize;

use crate::error::ModelError;

/// Ordered cash flows indexed by period, period 0 being the outlay year
#[derive(Debug, Clone, Serialize)]
pub struct CashFlowSeries {
    flows: Vec<f64>,
}

impl CashFlowSeries {
    /// Build the standard level series: one outlay period followed by
    /// `horizon` identical annual net cash flows
    ///
    /// The scenario holds production flat, so every operating year carries
    /// the same value.
    pub fn level(total_investment: f64, annual_cash_flow: f64, horizon: usize) -> Self {
        let mut flows = Vec::with_capacity(horizon + 1);
        flows.push(-total_investment);
        flows.extend(std::iter::repeat(annual_cash_flow).take(horizon));
        Self { flows }
    }

    /// The flows as a slice, period 0 first
    pub fn flows(&self) -> &[f64] {
        &self.flows
    }

    /// Number of periods after period 0
    pub fn horizon(&self) -> usize {
        self.flows.len().saturating_sub(1)
    }

    /// Running total of the flows, same length as the series
    pub fn cumulative(&self) -> Vec<f64> {
        self.flows
            .iter()
            .scan(0.0, |total, &cf| {
                *total += cf;
                Some(*total)
            })
            .collect()
    }

    /// First period at which the cumulative cash flow turns non-negative
    pub fn payback_period(&self) -> Result<usize, ModelError> {
        self.cumulative()
            .iter()
            .position(|&total| total >= 0.0)
            .ok_or(ModelError::PaybackNeverReached {
                horizon: self.horizon(),
            })
    }

    /// Rows for the year-by-year report
    pub fn rows(&self) -> Vec<CashFlowRow> {
        self.flows
            .iter()
            .zip(self.cumulative())
            .enumerate()
            .map(|(year, (&cash_flow, cumulative_cash_flow))| CashFlowRow {
                year,
                cash_flow,
                cumulative_cash_flow,
            })
            .collect()
    }
}

/// A single row of the cash-flow report
#[derive(Debug, Clone, Serialize)]
pub struct CashFlowRow {
    pub year: usize,
    pub cash_flow: f64,
    pub cumulative_cash_flow: f64,
}

/// Named scalar results of the appraisal
///
/// `irr` and `payback_period` are `None` when the metric is undefined for
/// the series; the report layer renders these explicitly instead of
/// emitting NaN or a fake index.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummary {
    pub total_investment: f64,
    pub annual_revenue: f64,
    pub total_annual_opex: f64,
    pub annual_cash_flow: f64,
    pub npv: f64,
    pub irr: Option<f64>,
    pub payback_period: Option<usize>,
}

/// Complete appraisal output: the summary plus the series behind it
#[derive(Debug, Clone, Serialize)]
pub struct AppraisalResult {
    pub summary: FinancialSummary,
    pub cash_flows: CashFlowSeries,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_level_series_shape() {
        let series = CashFlowSeries::level(4000.0, 1500.0, 10);

        assert_eq!(series.flows().len(), 11);
        assert_eq!(series.horizon(), 10);
        assert_eq!(series.flows()[0], -4000.0);
        for t in 1..=10 {
            assert_eq!(series.flows()[t], 1500.0);
        }
    }

    #[test]
    fn test_cumulative_sum_check() {
        let series = CashFlowSeries::level(4000.0, 1500.0, 10);
        let cumulative = series.cumulative();

        assert_eq!(cumulative.len(), 11);
        assert_relative_eq!(
            cumulative[10],
            -4000.0 + 10.0 * 1500.0,
            max_relative = 1e-12
        );

        // Positive annual flows keep the running total non-decreasing
        for window in cumulative.windows(2) {
            assert!(window[1] >= window[0]);
        }
    }

    #[test]
    fn test_payback_brackets_sign_change() {
        let series = CashFlowSeries::level(4000.0, 1500.0, 10);
        let payback = series.payback_period().unwrap();

        let cumulative = series.cumulative();
        assert!(cumulative[payback] >= 0.0);
        assert!(cumulative[payback - 1] < 0.0);
        assert_eq!(payback, 3);
    }

    #[test]
    fn test_payback_zero_when_no_outlay() {
        let series = CashFlowSeries::level(0.0, 100.0, 3);
        assert_eq!(series.payback_period().unwrap(), 0);
    }

    #[test]
    fn test_payback_never_reached_is_an_error() {
        // All-negative series never recovers
        let series = CashFlowSeries::level(4000.0, -10.0, 10);

        match series.payback_period() {
            Err(ModelError::PaybackNeverReached { horizon }) => assert_eq!(horizon, 10),
            other => panic!("expected PaybackNeverReached, got {:?}", other),
        }
    }

    #[test]
    fn test_rows_pair_flows_with_running_total() {
        let series = CashFlowSeries::level(100.0, 60.0, 2);
        let rows = series.rows();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].year, 0);
        assert_eq!(rows[0].cash_flow, -100.0);
        assert_eq!(rows[0].cumulative_cash_flow, -100.0);
        assert_eq!(rows[2].year, 2);
        assert_relative_eq!(rows[2].cumulative_cash_flow, 20.0, max_relative = 1e-12);
    }
}
