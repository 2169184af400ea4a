/// Fixed monthly payment that fully repays `principal` over `payments`
/// periods at `monthly_rate` compound interest:
///
/// M = P * r * (1 + r)^n / [(1 + r)^n - 1]
///
/// When the growth factor underflows to exactly 1 the payment degrades to
/// straight division, the zero-interest limit of the formula.
pub fn monthly_payment(principal: f64, monthly_rate: f64, payments: f64) -> f64 {
    let factor = (1.0 + monthly_rate).powf(payments);
    if factor == 1.0 {
        return principal / payments;
    }
    principal * (monthly_rate * factor) / (factor - 1.0)
}

/// Split a property price into down payment and financed principal.
pub fn down_payment_split(price: f64, down_payment_percent: f64) -> (f64, f64) {
    let down_payment = price * (down_payment_percent / 100.0);
    (down_payment, price - down_payment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_payment() {
        // 100k at 1% monthly over 12 payments, expected around 8884.88
        let payment = monthly_payment(100_000.0, 0.01, 12.0);
        assert!((payment - 8884.88).abs() < 0.05, "payment was {}", payment);
    }

    #[test]
    fn test_monthly_payment_fractional_term() {
        // Half-year term, payments need not be whole
        let payment = monthly_payment(6_000.0, 0.005, 6.0);
        assert!(payment > 1_000.0 && payment < 1_030.0, "payment was {}", payment);
    }

    #[test]
    fn test_monthly_payment_tiny_rate_falls_back() {
        // (1 + 1e-20) rounds to 1.0 in f64, so the divide-by-zero path
        // must degrade to principal / n
        let payment = monthly_payment(120_000.0, 1e-20, 120.0);
        assert!((payment - 1_000.0).abs() < 0.01);
    }

    #[test]
    fn test_down_payment_split() {
        let (down_payment, principal) = down_payment_split(500_000.0, 50.0);
        assert_eq!(down_payment, 250_000.0);
        assert_eq!(principal, 250_000.0);
    }
}
