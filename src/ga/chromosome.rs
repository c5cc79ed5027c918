//! Permutation chromosome.

use rand::Rng;

use crate::distance::PriceMatrix;
use crate::evaluation::tour_price;

use super::operators::random_permutation;

/// A candidate tour: an open permutation of place indices with its cached
/// price.
///
/// The price starts at infinity and is filled in by population
/// evaluation. Lower is better.
///
/// # Examples
///
/// ```
/// use u_tour::ga::Chromosome;
///
/// let c = Chromosome::new(vec![2, 0, 1]);
/// assert_eq!(c.order(), &[2, 0, 1]);
/// assert_eq!(c.price(), f64::INFINITY);
/// ```
#[derive(Debug, Clone)]
pub struct Chromosome {
    order: Vec<usize>,
    price: f64,
}

impl Chromosome {
    /// Wraps an existing ordering, price not yet evaluated.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            price: f64::INFINITY,
        }
    }

    /// Creates a uniformly random permutation of `0..n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self::new(random_permutation(n, rng))
    }

    /// The open ordering encoded by this chromosome.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Mutable access to the ordering for in-place mutation.
    pub fn order_mut(&mut self) -> &mut Vec<usize> {
        &mut self.order
    }

    /// Cached tour price (infinity until evaluated).
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Prices this chromosome's ordering and caches the result.
    pub fn evaluate(&mut self, prices: &PriceMatrix) {
        self.price = tour_price(&self.order, prices);
    }

    /// Builds a chromosome with a preset price, bypassing evaluation.
    #[cfg(test)]
    pub(crate) fn with_price(order: Vec<usize>, price: f64) -> Self {
        Self { order, price }
    }

    /// Number of places in the ordering.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the ordering holds no places.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
