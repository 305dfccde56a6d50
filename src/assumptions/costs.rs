//! Named cost breakdowns for the initial investment and annual operating budgets

/// A single named cost line item
#[derive(Debug, Clone)]
pub struct CostItem {
    pub name: String,
    pub amount: f64,
}

/// Ordered list of named cost line items
///
/// Order is preserved so reports list items the way the source document does.
#[derive(Debug, Clone)]
pub struct CostBreakdown {
    items: Vec<CostItem>,
}

/// Annual maintenance budget as a fraction of total initial investment
pub const MAINTENANCE_RATE: f64 = 0.02;

/// Packaging cost quoted for six months of operation (RWF)
pub const PACKAGING_SIX_MONTHS: f64 = 874_800_000.0;

impl CostBreakdown {
    /// Build a breakdown from (name, amount) pairs, keeping their order
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self {
            items: pairs
                .iter()
                .map(|&(name, amount)| CostItem {
                    name: name.to_string(),
                    amount,
                })
                .collect(),
        }
    }

    /// Initial investment breakdown for the lime plant (13 line items)
    pub fn lime_plant_investment() -> Self {
        Self::from_pairs(&[
            ("Buildings", 820_000_000.0),
            ("Limestone Equipment", 451_185_381.0),
            ("Staff Salaries (Year 1)", 643_000_000.0),
            ("Laboratory Equipment", 156_639_720.0),
            ("Lime Granulation Equipment", 841_803_796.0),
            ("Training", 60_000_000.0),
            ("Utilities Setup", 184_500_000.0),
            ("Laboratory Installation", 20_136_005.0),
            ("Factory Installation", 34_716_250.0),
            ("Packaging (6 months)", PACKAGING_SIX_MONTHS),
            ("Fertilizer Plates", 30_000_000.0),
            ("Market Research", 214_000_000.0),
            ("Contingency (5%)", 216_539_058.0),
        ])
    }

    /// Annual operating cost breakdown for the lime plant (6 line items)
    ///
    /// Maintenance is budgeted as a fixed fraction of the total initial
    /// investment; packaging is the six-month quote billed twice a year.
    pub fn lime_plant_operating(total_investment: f64) -> Self {
        Self::from_pairs(&[
            ("Staff Salaries", 643_000_000.0),
            ("Utilities", 24_000_000.0),
            ("Packaging Materials", PACKAGING_SIX_MONTHS * 2.0),
            ("Maintenance", total_investment * MAINTENANCE_RATE),
            ("Marketing", 214_000_000.0),
            ("Other Operating Expenses", 60_180_000.0),
        ])
    }

    /// Sum of all line items
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Line items in document order
    pub fn items(&self) -> &[CostItem] {
        &self.items
    }

    /// Amount for a named line item, if present
    pub fn amount(&self, name: &str) -> Option<f64> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.amount)
    }
}
