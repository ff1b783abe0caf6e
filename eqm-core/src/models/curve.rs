use super::Point;

/// A piecewise-linear curve sampled at strictly increasing prices.
///
/// A curve is a read-only view over one of the market table's quantity
/// columns: an ordered sequence of (quantity, price) points connected by
/// straight segments. Quantities are unconstrained in sign and direction —
/// a shifted demand curve may legitimately carry negative quantities, and
/// non-monotone quantity columns are accepted as-is.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CurveDto", into = "CurveDto")
)]
pub struct Curve(Vec<Point>);

impl Curve {
    /// Creates a new curve from a vector of points, validating all constraints
    pub fn new(points: Vec<Point>) -> Result<Self, CurveError> {
        Self::try_from(CurveDto(points))
    }

    /// Creates a new curve without validating the points
    ///
    /// # Safety
    ///
    /// This function bypasses all validation checks. The caller must guarantee
    /// that the points satisfy the requirements validated by
    /// [`Curve::try_from`]. Invalid points can lead to incorrect behavior in
    /// the solver, which assumes finite coordinates at increasing prices.
    pub unsafe fn new_unchecked(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// The points that define the curve, in increasing price order.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Translates every quantity by `delta`, leaving prices untouched.
    ///
    /// This is a pure derivation: the receiver is unchanged and a fresh curve
    /// is returned. No clamping is applied — a large negative `delta` can
    /// push quantities below zero, and the result is passed through unchanged
    /// (callers decide how to present such values).
    pub fn shift(&self, delta: f64) -> Curve {
        let points = self
            .0
            .iter()
            .map(|pt| Point {
                quantity: pt.quantity + delta,
                price: pt.price,
            })
            .collect();

        // Prices are untouched, so the ordering invariant is preserved.
        unsafe { Self::new_unchecked(points) }
    }
}

/// DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug)]
pub struct CurveDto(pub Vec<Point>);

impl Into<CurveDto> for Curve {
    fn into(self) -> CurveDto {
        CurveDto(self.0)
    }
}

impl TryFrom<CurveDto> for Curve {
    type Error = CurveError;

    /// Attempts to create a curve from a DTO, validating all constraints
    ///
    /// # Validation
    ///
    /// 1. The vector is not empty
    /// 2. No coordinate values are NaN or infinite
    /// 3. Prices are strictly increasing
    ///
    /// Quantities are deliberately not constrained: the law of demand and the
    /// law of supply are assumptions of the callers, not of this type.
    fn try_from(value: CurveDto) -> Result<Self, Self::Error> {
        if value.0.is_empty() {
            return Err(CurveError::Empty);
        }

        let mut prev = f64::NEG_INFINITY;
        for point in value.0.iter() {
            if point.quantity.is_nan() || point.price.is_nan() {
                return Err(CurveError::NaN);
            }
            if point.quantity.is_infinite() || point.price.is_infinite() {
                return Err(CurveError::Infinity);
            }
            if point.price <= prev {
                return Err(CurveError::UnsortedPrices);
            }
            prev = point.price;
        }

        Ok(Self(value.0))
    }
}

/// Errors that can occur when creating or validating a curve
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// Error when no points are provided
    #[error("no points provided")]
    Empty,
    /// Error when any coordinate value is NaN
    #[error("NaN value encountered")]
    NaN,
    /// Error when a point has infinite quantity or price
    #[error("quantities and prices cannot be infinite")]
    Infinity,
    /// Error when prices are not strictly increasing
    #[error("points are not ordered by strictly ascending price")]
    UnsortedPrices,
}
