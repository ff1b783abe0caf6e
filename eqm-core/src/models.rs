mod curve;
mod point;
mod table;

pub use curve::{Curve, CurveDto, CurveError};
pub use point::Point;
pub use table::{Column, LookupError, MarketTable, MarketTableDto, PricePoint, TableError};
