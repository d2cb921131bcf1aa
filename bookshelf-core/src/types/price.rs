//! Currency display for book prices

use serde::{Deserialize, Serialize};
use std::fmt;

/// A price in dollars, displayed as `$` followed by two decimals
///
/// Half-cent amounts round away from zero (`0.125` shows as `$0.13`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Price(pub f64);

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = (self.0 * 100.0).round() / 100.0;
        write!(f, "${:.2}", cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_display() {
        assert_eq!(Price(8.99).to_string(), "$8.99");
        assert_eq!(Price(10.0).to_string(), "$10.00");
        assert_eq!(Price(0.5).to_string(), "$0.50");
    }

    #[test]
    fn test_rounds_to_cents() {
        assert_eq!(Price(12.999).to_string(), "$13.00");
        assert_eq!(Price(7.004).to_string(), "$7.00");
    }

    #[test]
    fn test_half_cent_rounds_up() {
        assert_eq!(Price(0.125).to_string(), "$0.13");
        assert_eq!(Price(0.375).to_string(), "$0.38");
        assert_eq!(Price(1.125).to_string(), "$1.13");
        assert_eq!(Price(10.625).to_string(), "$10.63");
    }
}
