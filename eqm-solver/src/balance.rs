use eqm_core::models::{Column, LookupError, MarketTable};

/// The signed supply-minus-demand gap at a sampled price.
///
/// Positive means surplus (supply exceeds demand), negative means shortage
/// (demand exceeds supply), zero means the market clears at that price. The
/// price need not be the equilibrium; the whole point of the evaluation is to
/// probe prices away from it.
pub fn surplus_or_shortage(table: &MarketTable, price: f64) -> Result<f64, LookupError> {
    let supplied = table.quantity_at(Column::Supplied, price)?;
    let demanded = table.quantity_at(Column::Demanded, price)?;
    Ok(supplied - demanded)
}

/// The classified market balance at a sampled price.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Balance {
    /// Supply exceeds demand by the contained (positive) quantity
    Surplus(f64),
    /// Demand exceeds supply by the contained (positive) quantity
    Shortage(f64),
    /// Quantity demanded equals quantity supplied
    Cleared,
}

impl Balance {
    /// Classifies the market balance at a sampled price.
    pub fn at(table: &MarketTable, price: f64) -> Result<Self, LookupError> {
        Ok(Self::from_gap(surplus_or_shortage(table, price)?))
    }

    /// Classifies a signed supply-minus-demand gap.
    pub fn from_gap(gap: f64) -> Self {
        if gap > 0.0 {
            Self::Surplus(gap)
        } else if gap < 0.0 {
            Self::Shortage(-gap)
        } else {
            Self::Cleared
        }
    }
}

/// A government-imposed price bound.
///
/// A floor is a minimum legal price; set above the equilibrium it binds and
/// produces a surplus. A ceiling is a maximum legal price; set below the
/// equilibrium it binds and produces a shortage.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PriceControl {
    /// A minimum legal price
    Floor(f64),
    /// A maximum legal price
    Ceiling(f64),
}

impl PriceControl {
    /// The controlled price itself.
    pub fn price(&self) -> f64 {
        match *self {
            Self::Floor(price) | Self::Ceiling(price) => price,
        }
    }
}

/// Evaluates the market balance at a controlled price.
///
/// The control must sit on one of the table's sampled prices, the same
/// exact-match contract as every other lookup.
pub fn control_outcome(table: &MarketTable, control: PriceControl) -> Result<Balance, LookupError> {
    Balance::at(table, control.price())
}
