use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{iso, FormattableCurrency, Formatter, Money, Params, Position};

use crate::config::CurrencyConfig;

/// Renders amounts as currency text, e.g. `R$ 1.234,56`
///
/// Always two fraction digits, rounded half away from zero. Negative
/// amounts get a leading minus before the symbol. Digit grouping is done
/// by `rusty_money`; the symbol comes from the ISO currency unless the
/// config overrides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormatter {
    currency: &'static iso::Currency,
    symbol: String,
    decimal_separator: char,
    group_separator: char,
}

impl PriceFormatter {
    pub fn new(config: &CurrencyConfig) -> crate::Result<Self> {
        let currency = iso::find(&config.code).ok_or_else(|| {
            crate::Error::ConfigError(format!("Unknown currency code: {}", config.code))
        })?;

        Ok(Self::with_currency(currency, config))
    }

    fn with_currency(currency: &'static iso::Currency, config: &CurrencyConfig) -> Self {
        Self {
            currency,
            symbol: config
                .symbol
                .clone()
                .unwrap_or_else(|| currency.symbol().to_string()),
            decimal_separator: config.decimal_separator,
            group_separator: config.group_separator,
        }
    }

    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let mut magnitude = rounded.abs();
        magnitude.rescale(2);
        let money = Money::from_decimal(magnitude, self.currency);
        let digits = Formatter::money(
            &money,
            Params {
                digit_separator: self.group_separator,
                exponent_separator: self.decimal_separator,
                separator_pattern: vec![3; 9],
                positions: vec![Position::Amount],
                rounding: Some(2),
                ..Params::default()
            },
        );

        format!("{}{} {}", sign, self.symbol, digits)
    }
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::with_currency(iso::BRL, &CurrencyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brl() -> PriceFormatter {
        PriceFormatter::default()
    }

    #[test]
    fn test_zero() {
        assert_eq!(brl().format(Decimal::ZERO), "R$ 0,00");
    }

    #[test]
    fn test_two_fraction_digits() {
        assert_eq!(brl().format(Decimal::from(26)), "R$ 26,00");
        assert_eq!(brl().format(Decimal::new(199, 1)), "R$ 19,90");
        assert_eq!(brl().format(Decimal::new(5, 2)), "R$ 0,05");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(brl().format(Decimal::new(123456, 2)), "R$ 1.234,56");
        assert_eq!(brl().format(Decimal::from(999)), "R$ 999,00");
        assert_eq!(brl().format(Decimal::from(1_000_000)), "R$ 1.000.000,00");
        assert_eq!(brl().format(Decimal::from(123_456)), "R$ 123.456,00");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(brl().format(Decimal::new(12345, 3)), "R$ 12,35");
        assert_eq!(brl().format(Decimal::new(12344, 3)), "R$ 12,34");
        assert_eq!(brl().format(Decimal::new(-12345, 3)), "-R$ 12,35");
    }

    #[test]
    fn test_negative_and_negative_zero() {
        assert_eq!(brl().format(Decimal::new(-100, 2)), "-R$ 1,00");
        // -0.001 rounds to zero and must not keep its sign
        assert_eq!(brl().format(Decimal::new(-1, 3)), "R$ 0,00");
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let formatter = brl();
        let amount = Decimal::new(4290, 2);
        let first = formatter.format(amount);
        for _ in 0..10 {
            assert_eq!(formatter.format(amount), first);
        }
        assert_eq!(formatter.format(Decimal::ZERO), formatter.format(Decimal::ZERO));
    }

    #[test]
    fn test_custom_currency() {
        let usd = PriceFormatter::new(&CurrencyConfig {
            code: "USD".into(),
            symbol: None,
            decimal_separator: '.',
            group_separator: ',',
        })
        .unwrap();
        assert_eq!(usd.format(Decimal::new(123456789, 2)), "$ 1,234,567.89");
    }

    #[test]
    fn test_symbol_override() {
        let formatter = PriceFormatter::new(&CurrencyConfig {
            symbol: Some("BRL".into()),
            ..CurrencyConfig::default()
        })
        .unwrap();
        assert_eq!(formatter.format(Decimal::from(5)), "BRL 5,00");
    }

    #[test]
    fn test_unknown_currency_code() {
        let result = PriceFormatter::new(&CurrencyConfig {
            code: "XYZW".into(),
            ..CurrencyConfig::default()
        });
        assert!(matches!(result, Err(crate::Error::ConfigError(_))));
    }

    #[test]
    fn test_config_default_matches_builtin_default() {
        let configured = PriceFormatter::new(&CurrencyConfig::default()).unwrap();
        assert_eq!(configured, PriceFormatter::default());
    }

    #[test]
    fn test_huge_amount_keeps_grouping() {
        assert_eq!(
            brl().format(Decimal::from(1_234_567_890_123u64)),
            "R$ 1.234.567.890.123,00"
        );
    }
}
