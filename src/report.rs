//! CSV report export
//!
//! Two files mirror the appraisal output: a fixed-order metric summary and
//! the year-by-year cash-flow table. Writers flush before returning so a
//! failure surfaces as an error instead of a silently truncated file.

use std::path::Path;

use log::info;

use crate::error::ModelError;
use crate::model::{CashFlowSeries, FinancialSummary};

/// Default file name for the metric summary report
pub const ANALYSIS_FILE: &str = "lime_plant_financial_analysis.csv";

/// Default file name for the cash-flow report
pub const CASH_FLOWS_FILE: &str = "lime_plant_cash_flows.csv";

/// Write the seven-row metric summary to `path`
pub fn write_financial_analysis(path: &Path, summary: &FinancialSummary) -> Result<(), ModelError> {
    write_analysis_records(path, summary).map_err(|source| ModelError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    info!("financial analysis written to {}", path.display());
    Ok(())
}

/// Write the 11-row cash-flow table to `path`
pub fn write_cash_flows(path: &Path, series: &CashFlowSeries) -> Result<(), ModelError> {
    write_cash_flow_records(path, series).map_err(|source| ModelError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    info!("cash flows written to {}", path.display());
    Ok(())
}

fn write_analysis_records(path: &Path, summary: &FinancialSummary) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Metric", "Value"])?;

    // Undefined metrics are named, never NaN or an out-of-range index
    let irr = match summary.irr {
        Some(rate) => rate.to_string(),
        None => "Undefined".to_string(),
    };
    let payback = match summary.payback_period {
        Some(period) => period.to_string(),
        None => "Not reached".to_string(),
    };

    let rows = [
        ("Initial Investment (RWF)", summary.total_investment.to_string()),
        ("Annual Revenue (RWF)", summary.annual_revenue.to_string()),
        ("Annual Operating Costs (RWF)", summary.total_annual_opex.to_string()),
        ("Net Annual Cash Flow (RWF)", summary.annual_cash_flow.to_string()),
        ("NPV (RWF)", summary.npv.to_string()),
        ("IRR", irr),
        ("Payback Period (Years)", payback),
    ];

    for (metric, value) in rows {
        writer.write_record([metric, value.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

fn write_cash_flow_records(path: &Path, series: &CashFlowSeries) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Year", "Cash Flow (RWF)", "Cumulative Cash Flow (RWF)"])?;

    for row in series.rows() {
        writer.write_record([
            row.year.to_string(),
            row.cash_flow.to_string(),
            row.cumulative_cash_flow.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
