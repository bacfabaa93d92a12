// src/estimator/mod.rs

//! Solar savings estimator.
//!
//! Converts a monthly electricity bill into a recommended system size, cost
//! range, subsidy amount and payback period. The calculation is pure and
//! synchronous: no I/O, no shared state, identical inputs always produce
//! identical outputs.

use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Inputs
// ─────────────────────────────────────────────────────────────────────────────

/// Property category; drives tariff, cost per kW and subsidy eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyClass {
    Residential,
    Commercial,
}

impl PropertyClass {
    /// Strict parse of the wire strings `"residential"` / `"commercial"`.
    pub fn parse(s: &str) -> Result<Self, EstimateError> {
        match s.trim() {
            "residential" => Ok(Self::Residential),
            "commercial" => Ok(Self::Commercial),
            other => Err(EstimateError::InvalidPropertyClass(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
        }
    }
}

/// Supported states. Region does not affect the calculation yet; it is kept
/// on the interface for future region-specific tariff/irradiance tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    UttarPradesh,
    Maharashtra,
    Karnataka,
    Gujarat,
    TamilNadu,
    Rajasthan,
    Delhi,
    Telangana,
    AndhraPradesh,
    Kerala,
    MadhyaPradesh,
    WestBengal,
    Haryana,
    Punjab,
    Other,
}

impl Region {
    /// Total parse: any unrecognized name maps to `Other` so free-text
    /// adjacent input can never fail an estimate.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Uttar Pradesh" => Self::UttarPradesh,
            "Maharashtra" => Self::Maharashtra,
            "Karnataka" => Self::Karnataka,
            "Gujarat" => Self::Gujarat,
            "Tamil Nadu" => Self::TamilNadu,
            "Rajasthan" => Self::Rajasthan,
            "Delhi" => Self::Delhi,
            "Telangana" => Self::Telangana,
            "Andhra Pradesh" => Self::AndhraPradesh,
            "Kerala" => Self::Kerala,
            "Madhya Pradesh" => Self::MadhyaPradesh,
            "West Bengal" => Self::WestBengal,
            "Haryana" => Self::Haryana,
            "Punjab" => Self::Punjab,
            _ => Self::Other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::UttarPradesh => "Uttar Pradesh",
            Self::Maharashtra => "Maharashtra",
            Self::Karnataka => "Karnataka",
            Self::Gujarat => "Gujarat",
            Self::TamilNadu => "Tamil Nadu",
            Self::Rajasthan => "Rajasthan",
            Self::Delhi => "Delhi",
            Self::Telangana => "Telangana",
            Self::AndhraPradesh => "Andhra Pradesh",
            Self::Kerala => "Kerala",
            Self::MadhyaPradesh => "Madhya Pradesh",
            Self::WestBengal => "West Bengal",
            Self::Haryana => "Haryana",
            Self::Punjab => "Punjab",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum EstimateError {
    #[error("bill amount must be a positive number, got {0}")]
    InvalidBillAmount(f64),
    #[error("unknown property type '{0}', expected 'residential' or 'commercial'")]
    InvalidPropertyClass(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Cost model
// ─────────────────────────────────────────────────────────────────────────────

/// Business constants for the Indian solar market (2024-2025 estimates).
///
/// These are assumptions, not derived physics. `Default` carries the
/// canonical values; overriding a field is all it takes to re-tune.
#[derive(Debug, Clone)]
pub struct CostModel {
    /// Avg cost per unit (₹/kWh) billed to residential consumers.
    pub tariff_residential: f64,
    /// Commercial tariff is higher.
    pub tariff_commercial: f64,
    /// Approx market rate, ₹ per installed kW.
    pub cost_per_kw_residential: f64,
    /// Bulk rate usually lower.
    pub cost_per_kw_commercial: f64,
    /// Average daily generation in India, units per installed kW.
    pub units_per_kw_daily: f64,
    /// Quoted cost range covers market price variance around the base cost.
    pub cost_band_low: f64,
    pub cost_band_high: f64,
    /// Solar offsets ~90% of the bill; fixed meter charges remain.
    pub bill_offset_factor: f64,
    /// kg of CO2 per grid unit displaced.
    pub co2_kg_per_unit: f64,
    /// PM Surya Ghar Yojana: ₹/kW for the first `subsidy_tier1_limit_kw`.
    pub subsidy_rate_tier1: f64,
    pub subsidy_tier1_limit_kw: f64,
    /// ₹/kW between tier 1 and `subsidy_tier2_limit_kw`.
    pub subsidy_rate_tier2: f64,
    pub subsidy_tier2_limit_kw: f64,
    /// Fixed cap above tier 2; larger systems earn nothing extra.
    pub subsidy_cap: f64,
    /// Panels come in half-kW increments, one kW minimum.
    pub sizing_step_kw: f64,
    pub min_system_kw: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            tariff_residential: 8.0,
            tariff_commercial: 12.0,
            cost_per_kw_residential: 55_000.0,
            cost_per_kw_commercial: 45_000.0,
            units_per_kw_daily: 4.2,
            cost_band_low: 0.95,
            cost_band_high: 1.05,
            bill_offset_factor: 0.90,
            co2_kg_per_unit: 0.82,
            subsidy_rate_tier1: 30_000.0,
            subsidy_tier1_limit_kw: 2.0,
            subsidy_rate_tier2: 18_000.0,
            subsidy_tier2_limit_kw: 3.0,
            subsidy_cap: 78_000.0,
            sizing_step_kw: 0.5,
            min_system_kw: 1.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Output
// ─────────────────────────────────────────────────────────────────────────────

/// Raw numeric estimate. Immutable once produced; display formatting is
/// layered on top of these fields, never baked into them.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarEstimate {
    /// Recommended size in kW; always a multiple of the sizing step, >= 1.0.
    pub system_size_kw: f64,
    /// Cost bounds in whole ₹, `cost_min <= cost_max`.
    pub cost_min: i64,
    pub cost_max: i64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    /// Zero for commercial properties, capped for residential.
    pub subsidy_amount: f64,
    /// Net investment divided by annual savings. `None` when annual savings
    /// are zero; callers report "not applicable" instead of infinity.
    pub roi_years: Option<f64>,
    pub carbon_offset_tons_per_year: f64,
    pub recommendation: String,
}

impl CostModel {
    /// Produce an estimate from a monthly bill. Fails fast on a non-finite
    /// or non-positive bill; nothing partial is ever returned.
    pub fn estimate(
        &self,
        bill_amount: f64,
        _region: Region,
        property: PropertyClass,
    ) -> Result<SolarEstimate, EstimateError> {
        if !bill_amount.is_finite() || bill_amount <= 0.0 {
            return Err(EstimateError::InvalidBillAmount(bill_amount));
        }

        // Infer consumption from the bill via the tariff.
        let rate = match property {
            PropertyClass::Commercial => self.tariff_commercial,
            PropertyClass::Residential => self.tariff_residential,
        };
        let monthly_units = bill_amount / rate;
        let daily_units = monthly_units / 30.0;

        // Enough capacity to cover consumption, rounded up to the next
        // half-kW panel increment.
        let raw_kw = daily_units / self.units_per_kw_daily;
        let stepped_kw = (raw_kw / self.sizing_step_kw).ceil() * self.sizing_step_kw;
        let system_size_kw = stepped_kw.max(self.min_system_kw);

        let cost_per_kw = match property {
            PropertyClass::Commercial => self.cost_per_kw_commercial,
            PropertyClass::Residential => self.cost_per_kw_residential,
        };
        let base_cost = system_size_kw * cost_per_kw;
        let cost_min = (base_cost * self.cost_band_low).round() as i64;
        let cost_max = (base_cost * self.cost_band_high).round() as i64;

        let subsidy_amount = match property {
            PropertyClass::Commercial => 0.0,
            PropertyClass::Residential => self.residential_subsidy(system_size_kw),
        };

        let monthly_savings = bill_amount * self.bill_offset_factor;
        let annual_savings = monthly_savings * 12.0;

        let net_investment = base_cost - subsidy_amount;
        let roi_years = if annual_savings > 0.0 {
            Some(net_investment / annual_savings)
        } else {
            None
        };

        let annual_units = system_size_kw * self.units_per_kw_daily * 365.0;
        let carbon_offset_tons_per_year = annual_units * self.co2_kg_per_unit / 1000.0;

        let recommendation = self.recommendation(roi_years, property, subsidy_amount);

        Ok(SolarEstimate {
            system_size_kw,
            cost_min,
            cost_max,
            monthly_savings,
            annual_savings,
            subsidy_amount,
            roi_years,
            carbon_offset_tons_per_year,
            recommendation,
        })
    }

    /// Tiered residential subsidy: full rate up to tier 1, reduced rate up
    /// to tier 2, flat cap beyond.
    fn residential_subsidy(&self, size_kw: f64) -> f64 {
        if size_kw <= self.subsidy_tier1_limit_kw {
            size_kw * self.subsidy_rate_tier1
        } else if size_kw <= self.subsidy_tier2_limit_kw {
            self.subsidy_tier1_limit_kw * self.subsidy_rate_tier1
                + (size_kw - self.subsidy_tier1_limit_kw) * self.subsidy_rate_tier2
        } else {
            self.subsidy_cap
        }
    }

    // First match wins: sub-3-year payback trumps the subsidy pitch.
    fn recommendation(
        &self,
        roi_years: Option<f64>,
        property: PropertyClass,
        subsidy_amount: f64,
    ) -> String {
        if roi_years.is_some_and(|r| r < 3.0) {
            "Exceptional ROI. The high tariff in your category makes solar a highly \
             profitable investment with payback in under 3 years."
                .to_string()
        } else if property == PropertyClass::Residential && subsidy_amount > 0.0 {
            format!(
                "With the ₹{:.0}k Govt subsidy, your net cost is drastically reduced, \
                 securing free electricity for 20+ years.",
                subsidy_amount / 1000.0
            )
        } else {
            "A solid long-term investment. This system will insulate you from rising \
             grid electricity tariffs for decades."
                .to_string()
        }
    }
}

/// Estimate against the canonical cost model.
pub fn estimate(
    bill_amount: f64,
    region: Region,
    property: PropertyClass,
) -> Result<SolarEstimate, EstimateError> {
    CostModel::default().estimate(bill_amount, region, property)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn residential_bill_5000() {
        let e = estimate(5000.0, Region::UttarPradesh, PropertyClass::Residential).unwrap();
        // 625 units/month -> ~20.83/day -> raw 4.96 kW -> rounded up to 5.0
        assert_eq!(e.system_size_kw, 5.0);
        assert_eq!(e.cost_min, 261_250);
        assert_eq!(e.cost_max, 288_750);
        // > 3 kW hits the flat cap
        assert_eq!(e.subsidy_amount, 78_000.0);
        assert!(approx(e.monthly_savings, 4500.0));
        assert!(approx(e.annual_savings, 54_000.0));
        // (275000 - 78000) / 54000
        assert!(approx(e.roi_years.unwrap(), 197_000.0 / 54_000.0));
        assert!(approx(e.carbon_offset_tons_per_year, 6.2853));
        // roi > 3, residential with subsidy -> subsidy pitch
        assert!(e.recommendation.contains("₹78k Govt subsidy"));
    }

    #[test]
    fn residential_bill_2000_has_exceptional_roi() {
        let e = estimate(2000.0, Region::Other, PropertyClass::Residential).unwrap();
        assert_eq!(e.system_size_kw, 2.0);
        assert_eq!(e.cost_min, 104_500);
        assert_eq!(e.cost_max, 115_500);
        // size <= 2 kW: full tier-1 rate
        assert_eq!(e.subsidy_amount, 60_000.0);
        assert!(approx(e.annual_savings, 21_600.0));
        let roi = e.roi_years.unwrap();
        assert!(approx(roi, 50_000.0 / 21_600.0));
        assert!(roi < 3.0);
        assert!(e.recommendation.starts_with("Exceptional ROI"));
    }

    #[test]
    fn commercial_bill_5000() {
        let e = estimate(5000.0, Region::Maharashtra, PropertyClass::Commercial).unwrap();
        // commercial tariff 12 -> ~416.7 units -> raw 3.3 kW -> 3.5
        assert_eq!(e.system_size_kw, 3.5);
        assert_eq!(e.cost_min, 149_625);
        assert_eq!(e.cost_max, 165_375);
        assert_eq!(e.subsidy_amount, 0.0);
        let roi = e.roi_years.unwrap();
        assert!(approx(roi, 157_500.0 / 54_000.0));
        assert!(roi < 3.0);
        assert!(e.recommendation.starts_with("Exceptional ROI"));
    }

    #[test]
    fn mid_tier_subsidy_between_2_and_3_kw() {
        // bill of 2520 -> 315 units -> 10.5/day -> raw 2.5 kW exactly
        let e = estimate(2520.0, Region::Other, PropertyClass::Residential).unwrap();
        assert_eq!(e.system_size_kw, 2.5);
        assert_eq!(e.subsidy_amount, 2.0 * 30_000.0 + 0.5 * 18_000.0);
    }

    #[test]
    fn tiny_bill_clamps_to_minimum_size() {
        let e = estimate(10.0, Region::Other, PropertyClass::Residential).unwrap();
        assert_eq!(e.system_size_kw, 1.0);
    }

    #[test]
    fn rejects_non_positive_bills() {
        for bad in [0.0, -100.0] {
            let err = estimate(bad, Region::Other, PropertyClass::Residential).unwrap_err();
            assert!(matches!(err, EstimateError::InvalidBillAmount(_)));
        }
    }

    #[test]
    fn rejects_non_finite_bills() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = estimate(bad, Region::Other, PropertyClass::Commercial).unwrap_err();
            assert!(matches!(err, EstimateError::InvalidBillAmount(_)));
        }
    }

    #[test]
    fn size_is_always_a_half_kw_multiple_of_at_least_one() {
        let mut bill = 50.0;
        while bill < 50_000.0 {
            for property in [PropertyClass::Residential, PropertyClass::Commercial] {
                let e = estimate(bill, Region::Other, property).unwrap();
                assert!(e.system_size_kw >= 1.0, "bill {bill}");
                assert_eq!((e.system_size_kw * 2.0).fract(), 0.0, "bill {bill}");
            }
            bill += 137.0;
        }
    }

    #[test]
    fn commercial_never_gets_a_subsidy() {
        let mut bill = 100.0;
        while bill < 100_000.0 {
            let e = estimate(bill, Region::Other, PropertyClass::Commercial).unwrap();
            assert_eq!(e.subsidy_amount, 0.0, "bill {bill}");
            bill *= 1.7;
        }
    }

    #[test]
    fn residential_subsidy_is_monotonic_and_capped() {
        let mut prev_size = 0.0;
        let mut prev_subsidy = 0.0;
        let mut bill = 200.0;
        while bill < 30_000.0 {
            let e = estimate(bill, Region::Other, PropertyClass::Residential).unwrap();
            if e.system_size_kw > prev_size {
                assert!(e.subsidy_amount >= prev_subsidy, "bill {bill}");
                prev_size = e.system_size_kw;
                prev_subsidy = e.subsidy_amount;
            }
            assert!(e.subsidy_amount <= 78_000.0, "bill {bill}");
            bill += 300.0;
        }
        assert_eq!(prev_subsidy, 78_000.0);
    }

    #[test]
    fn cost_range_is_ordered() {
        let mut bill = 37.0;
        while bill < 80_000.0 {
            for property in [PropertyClass::Residential, PropertyClass::Commercial] {
                let e = estimate(bill, Region::Other, property).unwrap();
                assert!(e.cost_min <= e.cost_max, "bill {bill}");
            }
            bill *= 2.1;
        }
    }

    #[test]
    fn identical_inputs_give_identical_estimates() {
        let a = estimate(3456.78, Region::Kerala, PropertyClass::Residential).unwrap();
        let b = estimate(3456.78, Region::Kerala, PropertyClass::Residential).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn region_does_not_affect_the_numbers() {
        let base = estimate(4000.0, Region::Other, PropertyClass::Residential).unwrap();
        for region in [Region::UttarPradesh, Region::TamilNadu, Region::Delhi] {
            let e = estimate(4000.0, region, PropertyClass::Residential).unwrap();
            assert_eq!(e, base);
        }
    }

    #[test]
    fn zero_savings_yields_no_payback() {
        let model = CostModel {
            bill_offset_factor: 0.0,
            ..CostModel::default()
        };
        let e = model
            .estimate(5000.0, Region::Other, PropertyClass::Commercial)
            .unwrap();
        assert_eq!(e.annual_savings, 0.0);
        assert_eq!(e.roi_years, None);
        assert!(e.recommendation.starts_with("A solid long-term investment"));
    }

    #[test]
    fn region_parse_is_total() {
        assert_eq!(Region::parse("Karnataka"), Region::Karnataka);
        assert_eq!(Region::parse("  Punjab "), Region::Punjab);
        assert_eq!(Region::parse("Atlantis"), Region::Other);
        assert_eq!(Region::parse(""), Region::Other);
        assert_eq!(Region::parse("Karnataka").name(), "Karnataka");
    }

    #[test]
    fn property_class_parse_is_strict() {
        assert_eq!(
            PropertyClass::parse("residential").unwrap(),
            PropertyClass::Residential
        );
        assert_eq!(
            PropertyClass::parse(" commercial ").unwrap(),
            PropertyClass::Commercial
        );
        assert!(matches!(
            PropertyClass::parse("industrial"),
            Err(EstimateError::InvalidPropertyClass(_))
        ));
        assert!(PropertyClass::parse("Residential").is_err());
    }
}
