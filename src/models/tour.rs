//! Finalized tour type.

use serde::{Deserialize, Serialize};

use super::Place;

/// A finalized closed tour: place indices in visit order with the first
/// stop repeated at the end, plus the tour's total price.
///
/// Closure is presentational — the repeated stop makes the closing leg
/// explicit for consumers such as renderers. Pricing never reads the
/// closed form: [`tour_price`](crate::evaluation::tour_price) works on
/// open orderings and adds the closing leg itself.
///
/// # Examples
///
/// ```
/// use u_tour::models::Tour;
///
/// let tour = Tour::close(vec![2, 0, 1], 5.5);
/// assert_eq!(tour.stops(), &[2, 0, 1, 2]);
/// assert_eq!(tour.num_places(), 3);
/// assert_eq!(tour.total_price(), 5.5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    stops: Vec<usize>,
    total_price: f64,
}

impl Tour {
    /// Finalizes an open ordering by appending its first stop.
    ///
    /// `total_price` is the round-trip price of the open ordering, closing
    /// leg included.
    ///
    /// # Panics
    ///
    /// Panics if `order` is empty; solvers validate their input before
    /// building tours.
    pub fn close(order: Vec<usize>, total_price: f64) -> Self {
        assert!(!order.is_empty(), "cannot close an empty ordering");
        let mut stops = order;
        stops.push(stops[0]);
        Self { stops, total_price }
    }

    /// Closed stop sequence: length N+1 where the last stop equals the first.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Number of distinct places visited.
    pub fn num_places(&self) -> usize {
        self.stops.len() - 1
    }

    /// Total price of the tour, closing leg included.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Resolves the closed stop sequence against the place list it indexes.
    ///
    /// # Panics
    ///
    /// Panics if a stop indexes past `places`; a tour is only meaningful
    /// together with the place slice its solver was given.
    pub fn resolve<'a>(&self, places: &'a [Place]) -> Vec<&'a Place> {
        self.stops.iter().map(|&i| &places[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_appends_start() {
        let tour = Tour::close(vec![1, 3, 0, 2], 10.0);
        assert_eq!(tour.stops(), &[1, 3, 0, 2, 1]);
        assert_eq!(tour.num_places(), 4);
    }

    #[test]
    fn test_close_single_place() {
        let tour = Tour::close(vec![0], 0.0);
        assert_eq!(tour.stops(), &[0, 0]);
        assert_eq!(tour.num_places(), 1);
        assert_eq!(tour.total_price(), 0.0);
    }

    #[test]
    #[should_panic(expected = "cannot close an empty ordering")]
    fn test_close_empty_panics() {
        Tour::close(vec![], 0.0);
    }

    #[test]
    fn test_resolve() {
        let places = vec![
            Place::new("a", 1, 0.0, 0.0),
            Place::new("b", 2, 1.0, 0.0),
        ];
        let tour = Tour::close(vec![1, 0], 2.0);
        let resolved = tour.resolve(&places);
        let names: Vec<&str> = resolved.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
    }
}
