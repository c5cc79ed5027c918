//! Exhaustive permutation search.
//!
//! Scores every ordering of the place set and keeps the cheapest — the
//! provably minimal closed tour. Work grows factorially, so the entry
//! point takes an explicit place-count ceiling and fails fast instead of
//! hanging on oversized input.

use log::debug;

use crate::distance::PriceMatrix;
use crate::error::{Result, SolverError};
use crate::evaluation::tour_price;
use crate::models::{Place, Tour};

/// Finds the minimal-price closed tour by enumerating all N! orderings.
///
/// Rotations and reflections of the same cyclic tour are scored
/// separately; the search is deliberately brute-force. Ties resolve to
/// the first minimal ordering encountered during sequential enumeration,
/// so the result is deterministic.
///
/// `max_places` is the caller's statement of how much factorial growth is
/// acceptable — 10 already means 3.6 million orderings.
///
/// # Errors
///
/// [`SolverError::EmptyPlaces`] for an empty place set,
/// [`SolverError::TooManyPlaces`] when the place count exceeds
/// `max_places`.
///
/// # Examples
///
/// ```
/// use u_tour::distance::PriceMatrix;
/// use u_tour::exact::exact_tour;
/// use u_tour::models::Place;
///
/// let places = vec![
///     Place::new("a", 1, 0.0, 0.0),
///     Place::new("b", 2, 0.0, 1.0),
///     Place::new("c", 3, 1.0, 1.0),
///     Place::new("d", 4, 1.0, 0.0),
/// ];
/// let prices = PriceMatrix::from_places(&places);
/// let tour = exact_tour(&places, &prices, 8).unwrap();
/// // the unit-square perimeter: four legs, each pricing 1
/// assert!((tour.total_price() - 4.0).abs() < 1e-10);
/// ```
pub fn exact_tour(places: &[Place], prices: &PriceMatrix, max_places: usize) -> Result<Tour> {
    let n = places.len();
    if n == 0 {
        return Err(SolverError::EmptyPlaces);
    }
    if n > max_places {
        return Err(SolverError::TooManyPlaces {
            count: n,
            max: max_places,
        });
    }

    let mut order: Vec<usize> = (0..n).collect();
    let mut best_order = order.clone();
    let mut best_price = f64::INFINITY;

    for_each_permutation(&mut order, &mut |candidate| {
        let price = tour_price(candidate, prices);
        if price < best_price {
            best_price = price;
            best_order.copy_from_slice(candidate);
        }
    });

    debug!("exact search over {n} places: best price {best_price:.4}");
    Ok(Tour::close(best_order, best_price))
}

/// Visits every permutation of `items` exactly once (Heap's algorithm),
/// starting with the current ordering. `items` is left in an unspecified
/// order afterwards.
fn for_each_permutation<F>(items: &mut [usize], visit: &mut F)
where
    F: FnMut(&[usize]),
{
    let n = items.len();
    visit(items);

    let mut counters = vec![0usize; n];
    let mut i = 1;
    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                items.swap(0, i);
            } else {
                items.swap(counters[i], i);
            }
            visit(items);
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}
