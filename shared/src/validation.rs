//! Validation helpers for record payloads

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::models::NewSaleItem;

/// Money amounts may be zero but never negative
pub fn non_negative_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

/// Check that a line item's stored total matches quantity × unit price
pub fn line_total_consistent(item: &NewSaleItem) -> bool {
    item.line_total == item.unit_price * Decimal::from(item.quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, unit_price: &str, line_total: &str) -> NewSaleItem {
        NewSaleItem {
            product: 1,
            quantity,
            unit_price: unit_price.parse().unwrap(),
            line_total: line_total.parse().unwrap(),
        }
    }

    #[test]
    fn test_non_negative_amount() {
        assert!(non_negative_amount(&Decimal::ZERO).is_ok());
        assert!(non_negative_amount(&"10.50".parse().unwrap()).is_ok());
        assert!(non_negative_amount(&"-0.01".parse().unwrap()).is_err());
    }

    #[test]
    fn test_line_total_consistent() {
        assert!(line_total_consistent(&item(3, "25.00", "75.00")));
        assert!(!line_total_consistent(&item(3, "25.00", "80.00")));
    }

    #[test]
    fn test_line_total_zero_quantity() {
        assert!(line_total_consistent(&item(0, "25.00", "0")));
    }
}
