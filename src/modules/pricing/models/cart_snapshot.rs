use serde::{Deserialize, Serialize};

use crate::core::{Money, Result};

/// A priced line in the cart (product or order bump)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    pub fn total(&self) -> Result<Money> {
        self.unit_price.checked_times(self.quantity)
    }
}

/// Cart figures read from the checkout; the pricing base is their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub subtotal: Money,
    #[serde(default)]
    pub order_bump_total: Money,
}

impl CartSnapshot {
    pub fn new(subtotal: Money, order_bump_total: Money) -> Self {
        Self {
            subtotal,
            order_bump_total,
        }
    }

    pub fn from_lines(items: &[CartLine], bumps: &[CartLine]) -> Result<Self> {
        Ok(Self {
            subtotal: sum_lines(items)?,
            order_bump_total: sum_lines(bumps)?,
        })
    }

    /// Amount the pricing calculator starts from
    ///
    /// # Errors
    /// * `InvalidInput` when the sum exceeds `MAX_AMOUNT`
    pub fn base_price(&self) -> Result<Money> {
        self.subtotal.checked_add(self.order_bump_total)
    }

    pub fn is_empty(&self) -> bool {
        self.subtotal.is_zero() && self.order_bump_total.is_zero()
    }
}

fn sum_lines(lines: &[CartLine]) -> Result<Money> {
    lines
        .iter()
        .map(CartLine::total)
        .collect::<Result<Vec<_>>>()
        .and_then(Money::try_sum)
}
