use crate::core::formulas;
use crate::domain::model::{DownPaymentShare, DownPaymentSplit, MortgageBreakdown};
use crate::utils::error::Result;
use crate::utils::rounding::{ceil_to_int, format_amount, round_to_cents};
use crate::utils::validation;

/// Stateless mortgage calculator. Holds no data, so one instance can be
/// shared across threads or rebuilt per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct MortgageCalculator;

impl MortgageCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Monthly payment, principal, down payment and payment count for a
    /// fixed-rate mortgage.
    ///
    /// `annual_rate_percent` is the yearly rate as a percentage (6.5 for
    /// 6.5% APR), `period_years` the term in years (may be fractional,
    /// below 100). `annual_tax` and `additional_monthly_fees` are
    /// optional; zero is treated the same as absent.
    pub fn calculate(
        &self,
        price: f64,
        annual_rate_percent: f64,
        period_years: f64,
        down_payment_percent: f64,
        annual_tax: Option<f64>,
        additional_monthly_fees: Option<f64>,
    ) -> Result<MortgageBreakdown> {
        validation::validate_positive_amount("price", price)?;
        validation::validate_positive_amount("annual rate", annual_rate_percent)?;
        validation::validate_period_years("period", period_years)?;
        validation::validate_range("down payment percentage", down_payment_percent, 1.0, 99.0)?;
        let annual_tax = validation::validate_optional_amount("annual tax", annual_tax)?;
        let additional_monthly_fees =
            validation::validate_optional_amount("additional monthly fees", additional_monthly_fees)?;

        let price = round_to_cents(price);
        let monthly_rate = (annual_rate_percent / 100.0) / 12.0;
        let payments = period_years * 12.0;
        let (down_payment, principal) = formulas::down_payment_split(price, down_payment_percent);
        let monthly_mortgage = formulas::monthly_payment(principal, monthly_rate, payments);

        // Tax and fees contribute their cent-rounded values to the total
        let monthly_tax = annual_tax.map(|tax| round_to_cents(tax / 12.0)).unwrap_or(0.0);
        let additional_monthly_fees = additional_monthly_fees.map(round_to_cents).unwrap_or(0.0);
        let total_monthly = monthly_mortgage + monthly_tax + additional_monthly_fees;

        tracing::debug!(
            "calculated payment {:.2} on principal {:.2} over {} payments",
            monthly_mortgage,
            principal,
            payments
        );

        Ok(MortgageBreakdown {
            monthly_mortgage_int: ceil_to_int(monthly_mortgage),
            monthly_mortgage_decimal: format_amount(monthly_mortgage),
            principal_int: ceil_to_int(principal),
            principal_decimal: format_amount(principal),
            total_number_of_payments: payments,
            down_payment_int: ceil_to_int(down_payment),
            down_payment_decimal: format_amount(down_payment),
            additional_monthly_fees_int: ceil_to_int(additional_monthly_fees),
            additional_monthly_fees_decimal: format_amount(additional_monthly_fees),
            monthly_tax_int: ceil_to_int(monthly_tax),
            monthly_tax_decimal: format_amount(monthly_tax),
            total_monthly_int: ceil_to_int(total_monthly),
            total_monthly_decimal: format_amount(total_monthly),
        })
    }

    /// Down payment and financed principal for a price and percentage.
    pub fn down_payment_value(
        &self,
        price: f64,
        down_payment_percent: f64,
    ) -> Result<DownPaymentSplit> {
        validation::validate_positive_amount("price", price)?;
        validation::validate_range("down payment percentage", down_payment_percent, 1.0, 99.0)?;

        let price = round_to_cents(price);
        let (down_payment, principal) = formulas::down_payment_split(price, down_payment_percent);

        Ok(DownPaymentSplit {
            principal_int: ceil_to_int(principal),
            principal_decimal: format_amount(principal),
            down_payment_int: ceil_to_int(down_payment),
            down_payment_decimal: format_amount(down_payment),
        })
    }

    /// Percentage of the price covered by a concrete down payment amount.
    /// The amount must stay strictly below the property price.
    pub fn down_payment_percent(
        &self,
        price: f64,
        down_payment_price: f64,
    ) -> Result<DownPaymentShare> {
        validation::validate_positive_amount("price", price)?;
        validation::validate_down_payment_price("down payment price", down_payment_price, price)?;

        let price = round_to_cents(price);
        let down_payment = round_to_cents(down_payment_price);
        let principal = price - down_payment;
        let down_payment_percent = round_to_cents((down_payment / price) * 100.0);

        Ok(DownPaymentShare {
            principal_int: ceil_to_int(principal),
            principal_decimal: format_amount(principal),
            down_payment_int: ceil_to_int(down_payment),
            down_payment_decimal: format_amount(down_payment),
            down_payment_percent,
        })
    }
}
