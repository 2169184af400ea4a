use serde::{Deserialize, Serialize};

/// Full breakdown of a fixed-rate mortgage. Monetary figures are reported
/// twice: ceiling-rounded integers and two-decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageBreakdown {
    pub monthly_mortgage_int: i64,
    pub monthly_mortgage_decimal: String,
    pub principal_int: i64,
    pub principal_decimal: String,
    /// Raw payment count (`period_years * 12`), left unrounded so
    /// fractional terms survive.
    pub total_number_of_payments: f64,
    pub down_payment_int: i64,
    pub down_payment_decimal: String,
    pub additional_monthly_fees_int: i64,
    pub additional_monthly_fees_decimal: String,
    pub monthly_tax_int: i64,
    pub monthly_tax_decimal: String,
    pub total_monthly_int: i64,
    pub total_monthly_decimal: String,
}

/// Down payment and financed principal for a price and percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownPaymentSplit {
    pub principal_int: i64,
    pub principal_decimal: String,
    pub down_payment_int: i64,
    pub down_payment_decimal: String,
}

/// Share of the price covered by a concrete down payment amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownPaymentShare {
    pub principal_int: i64,
    pub principal_decimal: String,
    pub down_payment_int: i64,
    pub down_payment_decimal: String,
    pub down_payment_percent: f64,
}
