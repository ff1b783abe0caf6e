/// A curve is defined by its points, which in turn have an associated `quantity` and `price`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The quantity associated to the point (typically the dependent variable)
    pub quantity: f64,
    /// The price associated to the point (typically the independent variable)
    pub price: f64,
}
