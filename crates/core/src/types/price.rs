//! Type-safe price representation using decimal arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., pesos, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the store's default currency.
    #[must_use]
    pub fn store(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::default())
    }

    /// Format for display with two decimals and thousands separators
    /// (e.g., "₱1,299.00").
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = format!(
            "{:.2}",
            self.amount
                .abs()
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        );
        let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if self.amount.is_sign_negative() && !self.amount.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{sign}{}{grouped}.{fraction}", self.currency_code.symbol())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    PHP,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Currency symbol used when formatting prices.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::PHP => "₱",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::PHP => "PHP",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_small_amount() {
        assert_eq!(Price::store(Decimal::new(399, 0)).display(), "₱399.00");
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::store(Decimal::new(1299, 0)).display(), "₱1,299.00");
        assert_eq!(
            Price::new(Decimal::new(123_456_789, 2), CurrencyCode::USD).display(),
            "$1,234,567.89"
        );
    }

    #[test]
    fn test_display_rounds_to_two_places() {
        assert_eq!(Price::store(Decimal::new(29_999, 3)).display(), "₱30.00");
    }

    #[test]
    fn test_display_zero_and_negative() {
        assert_eq!(Price::store(Decimal::ZERO).display(), "₱0.00");
        assert_eq!(Price::store(Decimal::new(-1500, 0)).display(), "-₱1,500.00");
    }
}
