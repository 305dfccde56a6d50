//! Production capacity and revenue assumptions

/// Conversion factor from tons to kilograms (price is quoted per kg)
const KG_PER_TON: f64 = 1000.0;

/// Plant throughput and pricing constants
#[derive(Debug, Clone)]
pub struct ProductionCapacity {
    /// Nameplate throughput in tons per day
    pub daily_tons: f64,
    /// Lime sale price per kilogram (RWF)
    pub price_per_kg: f64,
    /// Effective working days per year, net of planned downtime
    pub working_days_per_year: f64,
}

impl ProductionCapacity {
    /// Capacity figures for the lime plant scenario
    pub fn lime_plant() -> Self {
        Self {
            daily_tons: 600.0,
            price_per_kg: 103.0,
            working_days_per_year: 323.62,
        }
    }

    /// Annual output in tons
    pub fn annual_tons(&self) -> f64 {
        self.daily_tons * self.working_days_per_year
    }

    /// Annual revenue in RWF
    pub fn annual_revenue(&self) -> f64 {
        self.annual_tons() * KG_PER_TON * self.price_per_kg
    }
}
