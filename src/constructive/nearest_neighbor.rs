//! Nearest-neighbor constructive heuristic.
//!
//! Builds one closed tour greedily: starting from a caller-chosen place,
//! always travel to the cheapest unvisited place next.
//!
//! # Complexity
//!
//! O(n²) where n = number of places.
//!
//! The result is locally best, not globally optimal: a single
//! deterministic pass with no backtracking or lookahead. The tour is
//! always feasible, and on typical inputs lands well above the optimum.

use log::debug;

use crate::distance::PriceMatrix;
use crate::error::{Result, SolverError};
use crate::evaluation::tour_price;
use crate::models::{Place, Tour};

/// Constructs a closed tour with the nearest-neighbor heuristic.
///
/// Starting at `start`, repeatedly scans all unvisited places and moves to
/// the one with the cheapest leg price, the first index encountered
/// winning ties. Visited bookkeeping lives in this call; the shared place
/// list is never touched, so one place set can serve concurrent runs.
///
/// # Arguments
///
/// * `places` — The place set (read-only, shared)
/// * `prices` — Price matrix over the same place set
/// * `start` — Index of the starting place
///
/// # Errors
///
/// [`SolverError::EmptyPlaces`] for an empty place set,
/// [`SolverError::StartOutOfBounds`] if `start` does not index `places`.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::nearest_neighbor_tour;
/// use u_tour::distance::PriceMatrix;
/// use u_tour::models::Place;
///
/// let places = vec![
///     Place::new("a", 1, 0.0, 0.0),
///     Place::new("b", 2, 10.0, 0.0),
///     Place::new("c", 3, 1.0, 0.0),
/// ];
/// let prices = PriceMatrix::from_places(&places);
/// let tour = nearest_neighbor_tour(&places, &prices, 0).unwrap();
/// // cheapest first: a → c → b → back to a
/// assert_eq!(tour.stops(), &[0, 2, 1, 0]);
/// ```
pub fn nearest_neighbor_tour(
    places: &[Place],
    prices: &PriceMatrix,
    start: usize,
) -> Result<Tour> {
    let n = places.len();
    if n == 0 {
        return Err(SolverError::EmptyPlaces);
    }
    if start >= n {
        return Err(SolverError::StartOutOfBounds {
            index: start,
            count: n,
        });
    }

    let mut visited = vec![false; n];
    visited[start] = true;

    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = start;

    for _ in 1..n {
        let mut best: Option<(usize, f64)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let price = prices.get(current, candidate);
            match best {
                Some((_, best_price)) if price >= best_price => {}
                _ => best = Some((candidate, price)),
            }
        }

        let (next, _) = best.expect("an unvisited place remains until the tour is complete");
        visited[next] = true;
        order.push(next);
        current = next;
    }

    let total = tour_price(&order, prices);
    debug!("nearest-neighbor tour from {start}: total price {total:.4}");
    Ok(Tour::close(order, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_places() -> (Vec<Place>, PriceMatrix) {
        let places = vec![
            Place::new("a", 1, 0.0, 0.0),
            Place::new("b", 2, 1.0, 0.0),
            Place::new("c", 3, 2.0, 0.0),
            Place::new("d", 4, 3.0, 0.0),
        ];
        let prices = PriceMatrix::from_places(&places);
        (places, prices)
    }

    #[test]
    fn test_walks_the_line() {
        let (places, prices) = line_places();
        let tour = nearest_neighbor_tour(&places, &prices, 0).unwrap();
        assert_eq!(tour.stops(), &[0, 1, 2, 3, 0]);
        // three unit legs plus the closing leg over distance 3
        let expected = 3.0 + 3.0_f64.sqrt();
        assert!((tour.total_price() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_start_in_the_middle() {
        let (places, prices) = line_places();
        let tour = nearest_neighbor_tour(&places, &prices, 2).unwrap();
        assert_eq!(tour.stops()[0], 2);
        assert_eq!(*tour.stops().last().unwrap(), 2);
    }

    #[test]
    fn test_visits_every_place_once() {
        let (places, prices) = line_places();
        for start in 0..places.len() {
            let tour = nearest_neighbor_tour(&places, &prices, start).unwrap();
            let mut seen = vec![false; places.len()];
            for &stop in &tour.stops()[..places.len()] {
                assert!(!seen[stop], "place {stop} visited twice");
                seen[stop] = true;
            }
            assert!(seen.iter().all(|&v| v));
        }
    }

    #[test]
    fn test_tie_break_takes_first_index() {
        // b and c are equidistant from a; the lower index must win
        let places = vec![
            Place::new("a", 1, 0.0, 0.0),
            Place::new("b", 2, 0.0, 1.0),
            Place::new("c", 3, 1.0, 0.0),
        ];
        let prices = PriceMatrix::from_places(&places);
        let tour = nearest_neighbor_tour(&places, &prices, 0).unwrap();
        assert_eq!(tour.stops(), &[0, 1, 2, 0]);
    }

    #[test]
    fn test_deterministic() {
        let (places, prices) = line_places();
        let a = nearest_neighbor_tour(&places, &prices, 1).unwrap();
        let b = nearest_neighbor_tour(&places, &prices, 1).unwrap();
        assert_eq!(a.stops(), b.stops());
        assert_eq!(a.total_price(), b.total_price());
    }

    #[test]
    fn test_single_place() {
        let places = vec![Place::new("a", 1, 4.0, 4.0)];
        let prices = PriceMatrix::from_places(&places);
        let tour = nearest_neighbor_tour(&places, &prices, 0).unwrap();
        assert_eq!(tour.stops(), &[0, 0]);
        assert_eq!(tour.total_price(), 0.0);
    }

    #[test]
    fn test_empty_places_rejected() {
        let prices = PriceMatrix::from_places(&[]);
        let err = nearest_neighbor_tour(&[], &prices, 0).unwrap_err();
        assert!(matches!(err, SolverError::EmptyPlaces));
    }

    #[test]
    fn test_start_out_of_bounds_rejected() {
        let (places, prices) = line_places();
        let err = nearest_neighbor_tour(&places, &prices, 4).unwrap_err();
        assert!(matches!(
            err,
            SolverError::StartOutOfBounds { index: 4, count: 4 }
        ));
    }
}
