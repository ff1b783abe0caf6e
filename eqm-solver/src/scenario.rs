use eqm_core::models::{Column, MarketTable};
use tracing::{Level, event};

use crate::{Intersection, SolveError, find_intersection};

/// One user interaction with the market: a demand shift and a supply shift
/// applied to a base table.
///
/// Solving a scenario derives both curves fresh from the table, translates
/// them, and runs the crossing scan. The table is only borrowed and never
/// mutated, so concurrent sessions holding their own scenarios can evaluate
/// against the same base data without coordination.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    /// Additive shift applied to the quantity-demanded column
    pub demand_shift: f64,
    /// Additive shift applied to the quantity-supplied column
    pub supply_shift: f64,
}

impl Scenario {
    /// A scenario with the given shifts.
    pub fn new(demand_shift: f64, supply_shift: f64) -> Self {
        Self {
            demand_shift,
            supply_shift,
        }
    }

    /// Finds the equilibrium of the shifted market, if the shifted curves
    /// still cross within the sampled price range.
    pub fn solve(&self, table: &MarketTable) -> Result<Option<Intersection>, SolveError> {
        event!(
            Level::DEBUG,
            demand_shift = self.demand_shift,
            supply_shift = self.supply_shift,
            "solving scenario"
        );

        let demand = table.curve(Column::Demanded).shift(self.demand_shift);
        let supply = table.curve(Column::Supplied).shift(self.supply_shift);
        find_intersection(&demand, &supply)
    }
}
