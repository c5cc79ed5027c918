//! Tour pricing.
//!
//! One pricing convention holds crate-wide: [`tour_price`] takes an *open*
//! ordering — each place exactly once, no repeated start — and adds the
//! closing leg itself. Explicitly closed sequences are output artifacts
//! ([`Tour`](crate::models::Tour)), never pricing input; passing one here
//! would count the closing leg twice.

use crate::distance::PriceMatrix;

/// Total round-trip price of an open ordering of place indices.
///
/// Sums the price of each consecutive leg, then the closing leg from the
/// last stop back to the first. O(len). A single-place ordering prices to
/// zero.
///
/// # Panics
///
/// Panics if `order` is empty or indexes past the matrix; solvers validate
/// their input before pricing.
///
/// # Examples
///
/// ```
/// use u_tour::distance::PriceMatrix;
/// use u_tour::evaluation::tour_price;
/// use u_tour::models::Place;
///
/// let places = vec![
///     Place::new("a", 1, 0.0, 0.0),
///     Place::new("b", 2, 0.0, 1.0),
/// ];
/// let prices = PriceMatrix::from_places(&places);
/// // out and back over the same unit leg
/// assert!((tour_price(&[0, 1], &prices) - 2.0).abs() < 1e-10);
/// ```
pub fn tour_price(order: &[usize], prices: &PriceMatrix) -> f64 {
    assert!(!order.is_empty(), "cannot price an empty ordering");

    let mut total = 0.0;
    for leg in order.windows(2) {
        total += prices.get(leg[0], leg[1]);
    }
    total + prices.get(order[order.len() - 1], order[0])
}
