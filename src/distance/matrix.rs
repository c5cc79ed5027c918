//! Dense price matrix.

use crate::models::Place;

/// A dense n×n matrix of pairwise traversal prices in row-major order.
///
/// Prices are computed once per place set with [`Place::price_to`] and
/// shared read-only by every solver, so the square roots behind the metric
/// are paid n² times up front instead of once per evaluated leg.
///
/// # Examples
///
/// ```
/// use u_tour::distance::PriceMatrix;
/// use u_tour::models::Place;
///
/// let places = vec![
///     Place::new("a", 1, 0.0, 0.0),
///     Place::new("b", 2, 3.0, 4.0),
/// ];
/// let prices = PriceMatrix::from_places(&places);
/// assert_eq!(prices.size(), 2);
/// assert!((prices.get(0, 1) - 5.0_f64.sqrt()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct PriceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PriceMatrix {
    /// Computes the price matrix for a place set.
    ///
    /// The metric is symmetric, so each pair is priced once and mirrored.
    pub fn from_places(places: &[Place]) -> Self {
        let n = places.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let price = places[i].price_to(&places[j]);
                data[i * n + j] = price;
                data[j * n + i] = price;
            }
        }
        Self { data, size: n }
    }

    /// Price of the leg from place `from` to place `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of places in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}
