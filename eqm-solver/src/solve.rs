use eqm_core::models::Curve;
use tracing::{Level, event};

/// The price/quantity pair at which the two curves cross.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intersection {
    /// The equilibrium quantity
    pub quantity: f64,
    /// The equilibrium price
    pub price: f64,
}

/// Errors for malformed solver input.
///
/// "No intersection" is not among them: two curves may legitimately never
/// cross within the sampled range (for example after an extreme shift), so
/// that case is reported as `Ok(None)`.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// The curves are sampled at different numbers of prices
    #[error("curves are sampled at different lengths: demand has {demand} points, supply has {supply}")]
    LengthMismatch {
        /// Number of points on the demand curve
        demand: usize,
        /// Number of points on the supply curve
        supply: usize,
    },
    /// A curve has fewer than two points, so it defines no segment
    #[error("curves need at least two points to define a segment, got {0}")]
    TooFewPoints(usize),
}

/// Finds the first crossing of two curves sampled at the same ordered prices.
///
/// Adjacent sample pairs are scanned in increasing price order. A pair is a
/// candidate when the demand-minus-supply gap changes sign or touches zero
/// across the interval; the test is non-strict in both directions, so an
/// exact touch at either endpoint counts as a crossing. On a candidate
/// interval the two full lines through the segments are intersected with the
/// standard 2x2 determinant formula; a zero denominator means the lines are
/// parallel or coincident on this interval and the scan moves on.
///
/// The first crossing found is returned and the scan stops there. For the
/// economically meaningful case (monotonically opposed curves) there is at
/// most one crossing, so this is exact; for non-monotone inputs any further
/// crossings are deliberately not searched for. Likewise, a crossing that
/// falls exactly on a shared vertex can satisfy the candidate test for both
/// adjacent intervals, and only the lower-price interval reports it. Both
/// behaviors are kept as-is rather than hardened into a general polyline
/// intersection routine.
pub fn find_intersection(
    demand: &Curve,
    supply: &Curve,
) -> Result<Option<Intersection>, SolveError> {
    let d = demand.points();
    let s = supply.points();

    if d.len() != s.len() {
        return Err(SolveError::LengthMismatch {
            demand: d.len(),
            supply: s.len(),
        });
    }
    if d.len() < 2 {
        return Err(SolveError::TooFewPoints(d.len()));
    }

    for i in 0..d.len() - 1 {
        let above = d[i].quantity >= s[i].quantity && d[i + 1].quantity <= s[i + 1].quantity;
        let below = d[i].quantity <= s[i].quantity && d[i + 1].quantity >= s[i + 1].quantity;
        if !(above || below) {
            continue;
        }

        // Intersect the full lines through the demand segment (x1,y1)-(x2,y2)
        // and the supply segment (x3,y3)-(x4,y4), with x = quantity and
        // y = price. Both segments share the same y endpoints by construction
        // since the curves are sampled at identical prices.
        let (x1, y1) = (d[i].quantity, d[i].price);
        let (x2, y2) = (d[i + 1].quantity, d[i + 1].price);
        let (x3, y3) = (s[i].quantity, s[i].price);
        let (x4, y4) = (s[i + 1].quantity, s[i + 1].price);

        let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if denom == 0.0 {
            // Parallel or coincident on this interval
            continue;
        }

        let quantity =
            ((x1 * y2 - y1 * x2) * (x3 - x4) - (x1 - x2) * (x3 * y4 - y3 * x4)) / denom;
        let price = ((x1 * y2 - y1 * x2) * (y3 - y4) - (y1 - y2) * (x3 * y4 - y3 * x4)) / denom;

        event!(Level::DEBUG, segment = i, quantity, price, "crossing located");
        return Ok(Some(Intersection { quantity, price }));
    }

    event!(Level::DEBUG, "no crossing within the sampled range");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eqm_core::models::{Column, MarketTable, Point};

    fn base_curves() -> (Curve, Curve) {
        let table = MarketTable::base();
        (table.curve(Column::Demanded), table.curve(Column::Supplied))
    }

    #[test]
    fn base_table_equilibrium() {
        let (demand, supply) = base_curves();
        let found = find_intersection(&demand, &supply).unwrap();
        assert_eq!(
            found,
            Some(Intersection {
                quantity: 40.0,
                price: 4.0,
            })
        );
    }

    #[test]
    fn equilibrium_between_sample_points() {
        let (demand, supply) = base_curves();
        // A +10 demand shift lands the crossing mid-segment
        let found = find_intersection(&demand.shift(10.0), &supply)
            .unwrap()
            .unwrap();
        assert_eq!(found.price, 4.5);
        assert_eq!(found.quantity, 45.0);
    }

    #[test]
    fn disjoint_curves_have_no_crossing() {
        let (demand, supply) = base_curves();
        let found = find_intersection(&demand.shift(1000.0), &supply).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn coincident_curves_have_no_crossing() {
        // Every interval passes the candidate test but the lines are the
        // same, so every denominator is zero and the scan comes up empty.
        let (demand, _) = base_curves();
        let found = find_intersection(&demand, &demand.shift(0.0)).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn touch_at_an_endpoint_counts() {
        let demand = Curve::new(vec![
            Point {
                quantity: 30.0,
                price: 1.0,
            },
            Point {
                quantity: 20.0,
                price: 2.0,
            },
        ])
        .unwrap();
        let supply = Curve::new(vec![
            Point {
                quantity: 10.0,
                price: 1.0,
            },
            Point {
                quantity: 20.0,
                price: 2.0,
            },
        ])
        .unwrap();

        let found = find_intersection(&demand, &supply).unwrap();
        assert_eq!(
            found,
            Some(Intersection {
                quantity: 20.0,
                price: 2.0,
            })
        );
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let (demand, supply) = base_curves();
        let truncated = Curve::new(supply.points()[..6].to_vec()).unwrap();
        assert_eq!(
            find_intersection(&demand, &truncated),
            Err(SolveError::LengthMismatch {
                demand: 7,
                supply: 6,
            })
        );
    }

    #[test]
    fn serialize_intersection() {
        let found = Intersection {
            quantity: 40.0,
            price: 4.0,
        };

        let raw = serde_json::to_string(&found).unwrap();
        assert_eq!(raw, r#"{"quantity":40.0,"price":4.0}"#);
        assert_eq!(serde_json::from_str::<Intersection>(&raw).unwrap(), found);
    }

    #[test]
    fn single_point_curves_are_rejected() {
        let point = Curve::new(vec![Point {
            quantity: 40.0,
            price: 4.0,
        }])
        .unwrap();
        assert_eq!(
            find_intersection(&point, &point),
            Err(SolveError::TooFewPoints(1))
        );
    }
}
