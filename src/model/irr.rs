//! Net present value and internal rate of return
//!
//! IRR is solved with the Newton-Raphson method, falling back to bisection
//! over a bracketing interval when the derivative vanishes or Newton stalls.

use crate::error::ModelError;

const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: usize = 1000;

// Annual rates are searched inside this bracket
const RATE_MIN: f64 = -0.99;
const RATE_MAX: f64 = 10.0;

/// Net present value of `cashflows` at an annual `rate`
///
/// Period 0 is discounted by (1+rate)^0 = 1, the same formula as every
/// later period.
pub fn calculate_npv(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// Internal rate of return of `cashflows` as an annual decimal rate
///
/// # Returns
/// * `Ok(rate)` such that NPV(rate) = 0
/// * `Err(IrrNoSignChange)` if the series is empty or never changes sign
/// * `Err(IrrNonConvergent)` if neither solver finds a root in the bracket
pub fn calculate_irr(cashflows: &[f64]) -> Result<f64, ModelError> {
    // All-zero series is a degenerate root at 0%
    if !cashflows.is_empty() && cashflows.iter().all(|&cf| cf.abs() < 1e-10) {
        return Ok(0.0);
    }

    // A root can only exist if the series changes sign
    let has_positive = cashflows.iter().any(|&cf| cf > 1e-10);
    let has_negative = cashflows.iter().any(|&cf| cf < -1e-10);
    if !has_positive || !has_negative {
        return Err(ModelError::IrrNoSignChange);
    }

    // Newton-Raphson iteration on the annual rate
    let mut rate = 0.05; // initial guess
    for _ in 0..MAX_ITERATIONS {
        let (npv, dnpv) = npv_and_derivative(cashflows, rate);

        if dnpv.abs() < 1e-20 {
            // Derivative too small, switch to bisection
            return calculate_irr_bisection(cashflows);
        }

        let new_rate = (rate - npv / dnpv).clamp(RATE_MIN, RATE_MAX);

        if (new_rate - rate).abs() < TOLERANCE {
            return Ok(new_rate);
        }

        rate = new_rate;
    }

    // Newton-Raphson did not converge, try bisection
    calculate_irr_bisection(cashflows)
}

/// Calculate NPV and its derivative with respect to the rate
fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        npv += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            dnpv -= (t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (npv, dnpv)
}

/// Fallback IRR calculation using the bisection method
fn calculate_irr_bisection(cashflows: &[f64]) -> Result<f64, ModelError> {
    let mut low = RATE_MIN;
    let mut high = RATE_MAX;

    // The root must lie inside the bracket
    if calculate_npv(cashflows, low) * calculate_npv(cashflows, high) > 0.0 {
        return Err(ModelError::IrrNonConvergent);
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = calculate_npv(cashflows, mid);

        if npv_mid.abs() < TOLERANCE || (high - low) / 2.0 < TOLERANCE {
            return Ok(mid);
        }

        if npv_mid * calculate_npv(cashflows, low) < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    Err(ModelError::IrrNonConvergent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_npv_at_zero_rate_is_raw_sum() {
        let cashflows = [-1000.0, 300.0, 300.0, 300.0, 300.0];
        let raw_sum: f64 = cashflows.iter().sum();

        assert_relative_eq!(calculate_npv(&cashflows, 0.0), raw_sum, max_relative = 1e-12);
    }

    #[test]
    fn test_npv_discounts_later_periods() {
        // 110 one year out at 10% is worth 100 today
        let npv = calculate_npv(&[-100.0, 110.0], 0.10);
        assert_relative_eq!(npv, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_simple_irr() {
        // Invest 1000, receive 1100 after one year: 10% exactly
        let irr = calculate_irr(&[-1000.0, 1100.0]).unwrap();
        assert_relative_eq!(irr, 0.10, epsilon = 1e-6);
    }

    #[test]
    fn test_level_cashflow_irr_zeroes_npv() {
        let cashflows = [-1000.0, 400.0, 400.0, 400.0, 400.0];
        let irr = calculate_irr(&cashflows).unwrap();

        assert!(irr > 0.0);
        assert_relative_eq!(calculate_npv(&cashflows, irr), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_no_sign_change_is_undefined() {
        let result = calculate_irr(&[100.0, 50.0, 25.0]);
        assert!(matches!(result, Err(ModelError::IrrNoSignChange)));

        let result = calculate_irr(&[-100.0, -50.0]);
        assert!(matches!(result, Err(ModelError::IrrNoSignChange)));
    }

    #[test]
    fn test_empty_series_is_undefined() {
        assert!(matches!(
            calculate_irr(&[]),
            Err(ModelError::IrrNoSignChange)
        ));
    }

    #[test]
    fn test_all_zero_series_has_zero_irr() {
        assert_eq!(calculate_irr(&[0.0, 0.0, 0.0]).unwrap(), 0.0);
    }
}
