//! Lime Plant Feasibility CLI
//!
//! Computes the capital-budgeting metrics for the fixed lime plant scenario,
//! prints the appraisal to the console, and exports the two CSV reports.
//! Pass --json to print the summary as JSON instead of the table view.

use std::env;
use std::path::Path;

use lime_plant_feasibility::{report, Assumptions, FinancialModel};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Lime Plant Feasibility v0.1.0");
    println!("=============================\n");

    let model = FinancialModel::new(Assumptions::lime_plant());
    let result = model.compute();
    let summary = &result.summary;

    let json_output = env::args().any(|arg| arg == "--json");

    if json_output {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        let assumptions = model.assumptions();
        println!(
            "Scenario: {:.0} t/day at {:.0} RWF/kg over {:.2} working days/year",
            assumptions.production.daily_tons,
            assumptions.production.price_per_kg,
            assumptions.production.working_days_per_year,
        );
        println!(
            "Discounting: {:.0}% over a {}-year horizon\n",
            assumptions.discount_rate * 100.0,
            assumptions.horizon_years,
        );

        println!("Summary:");
        println!("  Initial Investment:     {:>18.1} RWF", summary.total_investment);
        println!("  Annual Revenue:         {:>18.1} RWF", summary.annual_revenue);
        println!("  Annual Operating Costs: {:>18.1} RWF", summary.total_annual_opex);
        println!("  Net Annual Cash Flow:   {:>18.1} RWF", summary.annual_cash_flow);
        println!("  NPV:                    {:>18.1} RWF", summary.npv);
        match summary.irr {
            Some(rate) => println!("  IRR:                    {:>17.2}%", rate * 100.0),
            None => println!("  IRR:                    {:>18}", "Undefined"),
        }
        match summary.payback_period {
            Some(period) => println!("  Payback Period:         {:>12} years", period),
            None => println!("  Payback Period:         {:>18}", "Not reached"),
        }

        println!("\n{:>4} {:>22} {:>22}", "Year", "Cash Flow", "Cumulative");
        println!("{}", "-".repeat(50));
        for row in result.cash_flows.rows() {
            println!(
                "{:>4} {:>22.1} {:>22.1}",
                row.year, row.cash_flow, row.cumulative_cash_flow
            );
        }
    }

    report::write_financial_analysis(Path::new(report::ANALYSIS_FILE), summary)?;
    report::write_cash_flows(Path::new(report::CASH_FLOWS_FILE), &result.cash_flows)?;

    println!("\nFinancial analysis and cash flow data exported.");

    Ok(())
}
