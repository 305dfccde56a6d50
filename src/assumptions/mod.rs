//! Fixed scenario assumptions: cost breakdowns, capacity, discounting

mod costs;
mod production;

pub use costs::{CostBreakdown, CostItem, MAINTENANCE_RATE, PACKAGING_SIX_MONTHS};
pub use production::ProductionCapacity;

/// Container for all appraisal assumptions
///
/// Immutable after construction; the model reads it, never writes it.
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub investment: CostBreakdown,
    pub operating: CostBreakdown,
    pub production: ProductionCapacity,
    /// Annual discount rate applied to the cash-flow series
    pub discount_rate: f64,
    /// Number of operating years projected after the outlay year
    pub horizon_years: usize,
}

impl Assumptions {
    /// Assumptions for the lime plant scenario: 13% discount rate over a
    /// 10-year horizon, with maintenance derived from the investment total
    pub fn lime_plant() -> Self {
        let investment = CostBreakdown::lime_plant_investment();
        let operating = CostBreakdown::lime_plant_operating(investment.total());

        Self {
            investment,
            operating,
            production: ProductionCapacity::lime_plant(),
            discount_rate: 0.13,
            horizon_years: 10,
        }
    }

    /// Build assumptions from explicit parts (alternative scenarios in tests)
    pub fn new(
        investment: CostBreakdown,
        operating: CostBreakdown,
        production: ProductionCapacity,
        discount_rate: f64,
        horizon_years: usize,
    ) -> Self {
        Self {
            investment,
            operating,
            production,
            discount_rate,
            horizon_years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lime_plant_defaults() {
        let assumptions = Assumptions::lime_plant();

        assert_eq!(assumptions.discount_rate, 0.13);
        assert_eq!(assumptions.horizon_years, 10);
        assert_eq!(assumptions.investment.total(), 4_547_320_210.0);

        // Maintenance was derived from the investment total at construction
        let maintenance = assumptions.operating.amount("Maintenance").unwrap();
        assert_eq!(maintenance, 4_547_320_210.0 * MAINTENANCE_RATE);
    }
}
