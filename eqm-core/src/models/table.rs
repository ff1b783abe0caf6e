use super::{Curve, Point};

/// One row of the market table: a sampled price and the base quantities
/// demanded and supplied at that price.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// The sampled price
    pub price: f64,
    /// The base quantity demanded at this price
    pub demanded: f64,
    /// The base quantity supplied at this price
    pub supplied: f64,
}

impl PricePoint {
    /// The quantity stored in the requested column.
    pub fn quantity(&self, column: Column) -> f64 {
        match column {
            Column::Demanded => self.demanded,
            Column::Supplied => self.supplied,
        }
    }
}

/// Selects one of the table's two quantity columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Column {
    /// The quantity-demanded column
    Demanded,
    /// The quantity-supplied column
    Supplied,
}

/// The sampled market dataset: rows of (price, demanded, supplied), strictly
/// increasing in price.
///
/// The table is immutable after construction. Interactions never mutate it in
/// place; instead, fresh [`Curve`] views are derived on every request and any
/// shift is applied to the derived curve. To change the dataset, replace the
/// whole table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "MarketTableDto", into = "MarketTableDto")
)]
pub struct MarketTable(Vec<PricePoint>);

impl MarketTable {
    /// Creates a new table from a vector of rows, validating all constraints
    pub fn new(rows: Vec<PricePoint>) -> Result<Self, TableError> {
        Self::try_from(MarketTableDto(rows))
    }

    /// Creates a new table without validating the rows
    ///
    /// # Safety
    ///
    /// This function bypasses all validation checks. The caller must guarantee
    /// that the rows satisfy the requirements validated by
    /// [`MarketTable::try_from`].
    pub unsafe fn new_unchecked(rows: Vec<PricePoint>) -> Self {
        Self(rows)
    }

    /// The fixed reference dataset: seven rows with prices 1 through 7,
    /// demand falling from 70 to 10 and supply rising from 10 to 70.
    pub fn base() -> Self {
        let rows = (1..=7)
            .map(|price| PricePoint {
                price: price as f64,
                demanded: (80 - 10 * price) as f64,
                supplied: (10 * price) as f64,
            })
            .collect();

        Self(rows)
    }

    /// The table's rows, in increasing price order.
    pub fn rows(&self) -> &[PricePoint] {
        &self.0
    }

    /// Exact-match lookup of one quantity column at a sampled price.
    ///
    /// The price must be one of the table's sample points; values in between
    /// are not interpolated. The presentation layer restricts its inputs to
    /// sampled prices via discrete widgets, so a miss here means the caller
    /// passed a price the table does not carry.
    pub fn quantity_at(&self, column: Column, price: f64) -> Result<f64, LookupError> {
        self.0
            .iter()
            .find(|row| row.price == price)
            .map(|row| row.quantity(column))
            .ok_or(LookupError::PriceNotFound { price })
    }

    /// Derives the piecewise-linear curve for one quantity column.
    ///
    /// Each call builds a fresh [`Curve`]; nothing is cached or shared, so
    /// shifting the result never touches the table.
    pub fn curve(&self, column: Column) -> Curve {
        let points = self
            .0
            .iter()
            .map(|row| Point {
                quantity: row.quantity(column),
                price: row.price,
            })
            .collect();

        // The table invariants guarantee a valid curve.
        unsafe { Curve::new_unchecked(points) }
    }
}

/// DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug)]
pub struct MarketTableDto(pub Vec<PricePoint>);

impl Into<MarketTableDto> for MarketTable {
    fn into(self) -> MarketTableDto {
        MarketTableDto(self.0)
    }
}

impl TryFrom<MarketTableDto> for MarketTable {
    type Error = TableError;

    /// Attempts to create a table from a DTO, validating all constraints
    ///
    /// # Validation
    ///
    /// 1. At least two rows are provided (a single sample defines no segment)
    /// 2. No values are NaN or infinite
    /// 3. Prices are strictly increasing
    ///
    /// The quantity columns are not required to be monotone. The laws of
    /// demand and supply are properties of well-formed teaching data, not
    /// invariants of this type, and the solver must cope either way.
    fn try_from(value: MarketTableDto) -> Result<Self, Self::Error> {
        if value.0.len() < 2 {
            return Err(TableError::TooFewRows(value.0.len()));
        }

        let mut prev = f64::NEG_INFINITY;
        for row in value.0.iter() {
            if row.price.is_nan() || row.demanded.is_nan() || row.supplied.is_nan() {
                return Err(TableError::NaN);
            }
            if row.price.is_infinite() || row.demanded.is_infinite() || row.supplied.is_infinite() {
                return Err(TableError::Infinity);
            }
            if row.price <= prev {
                return Err(TableError::UnsortedPrices);
            }
            prev = row.price;
        }

        Ok(Self(value.0))
    }
}

/// Errors that can occur when creating or validating a market table
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TableError {
    /// Error when fewer than two rows are provided
    #[error("a market table needs at least two rows, got {0}")]
    TooFewRows(usize),
    /// Error when any value is NaN
    #[error("NaN value encountered")]
    NaN,
    /// Error when any value is infinite
    #[error("prices and quantities cannot be infinite")]
    Infinity,
    /// Error when prices are not strictly increasing
    #[error("rows are not ordered by strictly ascending price")]
    UnsortedPrices,
}

/// Errors that can occur when looking up a quantity at a price
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum LookupError {
    /// The price is not one of the table's sample points
    #[error("price {price} is not one of the table's sampled prices")]
    PriceNotFound {
        /// The price that was requested
        price: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_table_shape() {
        let table = MarketTable::base();
        assert_eq!(table.rows().len(), 7);
        assert_eq!(
            table.rows()[0],
            PricePoint {
                price: 1.0,
                demanded: 70.0,
                supplied: 10.0,
            }
        );
        assert_eq!(
            table.rows()[6],
            PricePoint {
                price: 7.0,
                demanded: 10.0,
                supplied: 70.0,
            }
        );
    }

    #[test]
    fn lookup_at_sampled_price() {
        let table = MarketTable::base();
        assert_eq!(table.quantity_at(Column::Demanded, 6.0), Ok(20.0));
        assert_eq!(table.quantity_at(Column::Supplied, 6.0), Ok(60.0));
    }

    #[test]
    fn lookup_does_not_interpolate() {
        let table = MarketTable::base();
        assert_eq!(
            table.quantity_at(Column::Demanded, 2.5),
            Err(LookupError::PriceNotFound { price: 2.5 })
        );
    }

    #[test]
    fn too_few_rows() {
        assert_eq!(MarketTable::new(vec![]).unwrap_err(), TableError::TooFewRows(0));
        assert_eq!(
            MarketTable::new(vec![PricePoint {
                price: 1.0,
                demanded: 70.0,
                supplied: 10.0,
            }])
            .unwrap_err(),
            TableError::TooFewRows(1)
        );
    }

    #[test]
    fn unsorted_rows() {
        let rows = vec![
            PricePoint {
                price: 2.0,
                demanded: 60.0,
                supplied: 20.0,
            },
            PricePoint {
                price: 1.0,
                demanded: 70.0,
                supplied: 10.0,
            },
        ];
        assert_eq!(MarketTable::new(rows).unwrap_err(), TableError::UnsortedPrices);
    }

    #[test]
    fn nan_rows() {
        let rows = vec![
            PricePoint {
                price: 1.0,
                demanded: f64::NAN,
                supplied: 10.0,
            },
            PricePoint {
                price: 2.0,
                demanded: 60.0,
                supplied: 20.0,
            },
        ];
        assert_eq!(MarketTable::new(rows).unwrap_err(), TableError::NaN);
    }

    #[test]
    fn derived_curves_read_the_right_column() {
        let table = MarketTable::base();

        let demand = table.curve(Column::Demanded);
        assert_eq!(demand.points()[0].quantity, 70.0);
        assert_eq!(demand.points()[6].quantity, 10.0);

        let supply = table.curve(Column::Supplied);
        assert_eq!(supply.points()[0].quantity, 10.0);
        assert_eq!(supply.points()[6].quantity, 70.0);
    }

    #[test]
    fn deserialize_rejects_invalid_table() {
        let raw = r#"[
            { "price": 3.0, "demanded": 50.0, "supplied": 30.0 },
            { "price": 2.0, "demanded": 60.0, "supplied": 20.0 }
        ]"#;
        assert!(serde_json::from_str::<MarketTable>(raw).is_err());

        let raw = r#"[
            { "price": 2.0, "demanded": 60.0, "supplied": 20.0 },
            { "price": 3.0, "demanded": 50.0, "supplied": 30.0 }
        ]"#;
        assert!(serde_json::from_str::<MarketTable>(raw).is_ok());
    }
}
