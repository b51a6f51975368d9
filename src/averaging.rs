use thiserror::Error;

/// One rejected input field. The first offending field wins and the
/// calculation is not attempted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("enter a value for {0}")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    NotNumeric(&'static str),
    #[error("{0} must be a whole number of units")]
    NotInteger(&'static str),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("{0} must be non-zero")]
    Zero(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorInput {
    pub initial_price: f64,
    pub quantity: u64,
    pub current_price: f64,
    pub target_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    pub recommended_quantity: u64,
    pub additional_amount: f64,
    pub total_investment: f64,
    pub average_price: f64,
    pub expected_return: f64,
}

impl CalculatorInput {
    /// Parses the raw form fields. Guards every precondition of `compute`,
    /// in particular a zero current price never reaches the division.
    pub fn from_fields(
        initial_price: &str,
        quantity: &str,
        current_price: &str,
        target_price: &str,
    ) -> Result<CalculatorInput, ValidationError> {
        Ok(CalculatorInput {
            initial_price: parse_price(initial_price, "initial buy price")?,
            quantity: parse_quantity(quantity, "quantity")?,
            current_price: parse_price(current_price, "current price")?,
            target_price: parse_target(target_price, "target price")?,
        })
    }
}

/// Suggests an add-on purchase that pulls the average entry price down and
/// reports the position after that purchase.
///
/// The add-on is sized inversely with how far the price has moved:
/// `quantity * (initial / current)` units, so the deeper the drawdown the
/// larger the suggested buy. When the price has risen the suggestion can
/// round down to zero, which is a valid result rather than an error. This
/// is a heuristic, not a capital- or risk-aware position size.
///
/// Only reported fields are rounded; every intermediate value stays exact
/// so rounding error does not compound across the steps.
pub fn compute(input: &CalculatorInput) -> CalculationResult {
    let CalculatorInput {
        initial_price,
        quantity,
        current_price,
        target_price,
    } = *input;

    let quantity = quantity as f64;

    let recommended_quantity = (quantity * (initial_price / current_price)).round();
    let additional_amount = current_price * recommended_quantity;
    let total_investment = initial_price * quantity + additional_amount;
    let average_price = total_investment / (quantity + recommended_quantity);
    let expected_return = (target_price - average_price) / average_price * 100.0;

    CalculationResult {
        recommended_quantity: recommended_quantity as u64,
        additional_amount: additional_amount.round(),
        total_investment: total_investment.round(),
        average_price: average_price.round(),
        expected_return: (expected_return * 100.0).round() / 100.0,
    }
}

fn required<'a>(raw: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(trimmed)
    }
}

fn parse_price(raw: &str, field: &'static str) -> Result<f64, ValidationError> {
    let raw = required(raw, field)?;

    let value: f64 = raw
        .parse()
        .map_err(|_| ValidationError::NotNumeric(field))?;

    if !value.is_finite() {
        return Err(ValidationError::NotNumeric(field));
    }

    if value <= 0.0 {
        return Err(ValidationError::NotPositive(field));
    }

    Ok(value)
}

fn parse_quantity(raw: &str, field: &'static str) -> Result<u64, ValidationError> {
    let raw = required(raw, field)?;

    let value = match raw.parse::<u64>() {
        Ok(value) => value,
        Err(_) if raw.parse::<f64>().is_ok() => return Err(ValidationError::NotInteger(field)),
        Err(_) => return Err(ValidationError::NotNumeric(field)),
    };

    if value == 0 {
        return Err(ValidationError::NotPositive(field));
    }

    Ok(value)
}

fn parse_target(raw: &str, field: &'static str) -> Result<f64, ValidationError> {
    let raw = required(raw, field)?;

    let value: f64 = raw
        .parse()
        .map_err(|_| ValidationError::NotNumeric(field))?;

    if !value.is_finite() {
        return Err(ValidationError::NotNumeric(field));
    }

    if value == 0.0 {
        return Err(ValidationError::Zero(field));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(
        initial_price: f64,
        quantity: u64,
        current_price: f64,
        target_price: f64,
    ) -> CalculatorInput {
        CalculatorInput {
            initial_price,
            quantity,
            current_price,
            target_price,
        }
    }

    #[test]
    fn price_dropped_ten_percent() {
        let result = compute(&input(50_000.0, 10, 45_000.0, 48_000.0));

        assert_eq!(result.recommended_quantity, 11);
        assert_eq!(result.additional_amount, 495_000.0);
        assert_eq!(result.total_investment, 995_000.0);
        assert_eq!(result.average_price, 47_381.0);
        assert_eq!(result.expected_return, 1.31);
    }

    #[test]
    fn price_unchanged() {
        let result = compute(&input(50_000.0, 10, 50_000.0, 55_000.0));

        assert_eq!(result.recommended_quantity, 10);
        assert_eq!(result.additional_amount, 500_000.0);
        assert_eq!(result.total_investment, 1_000_000.0);
        assert_eq!(result.average_price, 50_000.0);
        assert_eq!(result.expected_return, 10.00);
    }

    #[test]
    fn add_on_rounds_to_zero_when_price_ran_away() {
        let result = compute(&input(1.0, 1, 100.0, 150.0));

        assert_eq!(result.recommended_quantity, 0);
        assert_eq!(result.additional_amount, 0.0);
        assert_eq!(result.total_investment, 1.0);
        assert_eq!(result.average_price, 1.0);
    }

    #[test]
    fn expected_return_uses_unrounded_average() {
        // average is 7/3 ~ 2.33; against the rounded average of 2 the
        // return would read 100%, against the exact one it is 5/7.
        let result = compute(&input(3.0, 1, 2.0, 4.0));

        assert_eq!(result.average_price, 2.0);
        assert_eq!(result.expected_return, 71.43);
    }

    #[test]
    fn total_investment_identity() {
        for &(initial, quantity, current) in &[
            (50_000.0, 10, 45_000.0),
            (120.5, 7, 80.25),
            (3.0, 1, 2.0),
            (10.0, 3, 15.0),
        ] {
            let result = compute(&input(initial, quantity, current, initial));

            let recommended = (quantity as f64 * (initial / current)).round();
            assert_eq!(
                result.total_investment,
                (initial * quantity as f64 + current * recommended).round()
            );
        }
    }

    #[test]
    fn average_price_between_entry_and_market() {
        for &(initial, quantity, current) in &[
            (50_000.0, 10, 45_000.0),
            (100.0, 5, 25.0),
            (80.0, 3, 95.0),
            (7.5, 12, 6.0),
        ] {
            let result = compute(&input(initial, quantity, current, initial));

            if result.recommended_quantity > 0 {
                let low = initial.min(current).floor();
                let high = initial.max(current).ceil();

                assert!(
                    result.average_price >= low && result.average_price <= high,
                    "average {} outside [{}, {}]",
                    result.average_price,
                    low,
                    high
                );
            }
        }
    }

    #[test]
    fn compute_is_deterministic() {
        let input = input(123.45, 9, 101.5, 140.0);

        assert_eq!(compute(&input), compute(&input));
    }

    #[test]
    fn negative_return_when_target_below_average() {
        let result = compute(&input(50_000.0, 10, 45_000.0, 40_000.0));

        assert!(result.expected_return < 0.0);
    }

    #[test]
    fn rejects_empty_field() {
        let result = CalculatorInput::from_fields("", "10", "45000", "48000");

        assert_eq!(result, Err(ValidationError::Missing("initial buy price")));
    }

    #[test]
    fn rejects_zero_price() {
        let result = CalculatorInput::from_fields("50000", "10", "0", "48000");

        assert_eq!(result, Err(ValidationError::NotPositive("current price")));
    }

    #[test]
    fn rejects_zero_quantity() {
        let result = CalculatorInput::from_fields("50000", "0", "45000", "48000");

        assert_eq!(result, Err(ValidationError::NotPositive("quantity")));
    }

    #[test]
    fn rejects_fractional_quantity() {
        let result = CalculatorInput::from_fields("50000", "10.5", "45000", "48000");

        assert_eq!(result, Err(ValidationError::NotInteger("quantity")));
    }

    #[test]
    fn rejects_zero_target() {
        let result = CalculatorInput::from_fields("50000", "10", "45000", "0");

        assert_eq!(result, Err(ValidationError::Zero("target price")));
    }

    #[test]
    fn rejects_garbage() {
        let result = CalculatorInput::from_fields("50..0", "10", "45000", "48000");

        assert_eq!(
            result,
            Err(ValidationError::NotNumeric("initial buy price"))
        );
    }

    #[test]
    fn accepts_trimmed_fields() {
        let result = CalculatorInput::from_fields(" 50000 ", "10", "45000.5", "48000").unwrap();

        assert_eq!(result.initial_price, 50_000.0);
        assert_eq!(result.current_price, 45_000.5);
    }
}
