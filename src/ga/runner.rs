//! The evolutionary loop.
//!
//! [`run`] orchestrates the complete process: random initialization →
//! evaluation → tournament selection → crossover → mutation → wholesale
//! replacement, for a fixed number of generations.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distance::PriceMatrix;
use crate::error::{Result, SolverError};
use crate::evaluation::tour_price;
use crate::models::{Place, Tour};

use super::chromosome::Chromosome;
use super::config::GaConfig;
use super::operators::{prefix_crossover, scramble_mutation, tournament};

/// Result of a genetic solver run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best tour found across the whole run, finalized.
    pub best: Tour,

    /// Number of generations executed.
    pub generations: usize,

    /// Best-ever price after initialization and after each generation.
    ///
    /// Length `generations + 1`; non-increasing, since the best individual
    /// is tracked across the whole run.
    pub price_history: Vec<f64>,
}

/// Runs the genetic solver over a place set.
///
/// The initial population is `population_size` uniformly random
/// permutations. Each generation fills every slot of the next population
/// from two tournament-selected parents — crossing over at
/// `crossover_rate`, otherwise copying the first parent verbatim — and
/// then mutates each new individual at `mutation_rate`. The population is
/// replaced wholesale; the best individual ever evaluated is remembered
/// for the final report but never reinserted into the population.
///
/// One RNG is created here, seeded from [`GaConfig::seed`] or entropy,
/// and threaded through every random decision, so a fixed seed makes runs
/// bit-for-bit reproducible.
///
/// # Errors
///
/// [`SolverError::InvalidConfig`] via [`GaConfig::validate`] before any
/// evolution starts, and [`SolverError::EmptyPlaces`] for an empty place
/// set.
///
/// # Examples
///
/// ```
/// use u_tour::distance::PriceMatrix;
/// use u_tour::ga::{self, GaConfig};
/// use u_tour::models::Place;
///
/// let places = vec![
///     Place::new("a", 1, 0.0, 0.0),
///     Place::new("b", 2, 0.0, 1.0),
///     Place::new("c", 3, 1.0, 1.0),
///     Place::new("d", 4, 1.0, 0.0),
/// ];
/// let prices = PriceMatrix::from_places(&places);
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_generations(50)
///     .with_seed(42);
///
/// let result = ga::run(&places, &prices, &config).unwrap();
/// assert_eq!(result.best.num_places(), 4);
/// assert!(result.best.total_price() < f64::INFINITY);
/// ```
pub fn run(places: &[Place], prices: &PriceMatrix, config: &GaConfig) -> Result<GaResult> {
    config.validate()?;

    let n = places.len();
    if n == 0 {
        return Err(SolverError::EmptyPlaces);
    }

    // A single place admits exactly one tour; evolving length-one
    // permutations would spin through generations without change.
    if n == 1 {
        let total = tour_price(&[0], prices);
        return Ok(GaResult {
            best: Tour::close(vec![0], total),
            generations: 0,
            price_history: vec![total],
        });
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let mut population: Vec<Chromosome> = (0..config.population_size)
        .map(|_| Chromosome::random(n, &mut rng))
        .collect();
    evaluate_population(&mut population, prices, config.parallel);

    let mut best = find_best(&population).clone();
    let mut price_history = Vec::with_capacity(config.generations + 1);
    price_history.push(best.price());
    debug!(
        "ga over {n} places: initial best {:.4} in population of {}",
        best.price(),
        config.population_size
    );

    for generation in 0..config.generations {
        let mut next_gen = Vec::with_capacity(config.population_size);
        for _ in 0..config.population_size {
            let p1 = tournament(&population, config.tournament_size, &mut rng);
            let p2 = tournament(&population, config.tournament_size, &mut rng);

            let child = if rng.random_range(0.0..1.0) < config.crossover_rate {
                Chromosome::new(prefix_crossover(
                    population[p1].order(),
                    population[p2].order(),
                    &mut rng,
                ))
            } else {
                Chromosome::new(population[p1].order().to_vec())
            };
            next_gen.push(child);
        }

        for individual in &mut next_gen {
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                scramble_mutation(individual.order_mut(), &mut rng);
            }
        }

        evaluate_population(&mut next_gen, prices, config.parallel);
        population = next_gen;

        let generation_best = find_best(&population);
        if generation_best.price() < best.price() {
            best = generation_best.clone();
            debug!("generation {generation}: best price now {:.4}", best.price());
        }
        price_history.push(best.price());
    }

    let total = best.price();
    Ok(GaResult {
        best: Tour::close(best.order().to_vec(), total),
        generations: config.generations,
        price_history,
    })
}

/// Prices every individual in the population.
#[cfg(feature = "parallel")]
fn evaluate_population(population: &mut [Chromosome], prices: &PriceMatrix, parallel: bool) {
    use rayon::prelude::*;

    if parallel {
        population
            .par_iter_mut()
            .for_each(|individual| individual.evaluate(prices));
    } else {
        for individual in population.iter_mut() {
            individual.evaluate(prices);
        }
    }
}

/// Prices every individual in the population.
#[cfg(not(feature = "parallel"))]
fn evaluate_population(population: &mut [Chromosome], prices: &PriceMatrix, _parallel: bool) {
    for individual in population.iter_mut() {
        individual.evaluate(prices);
    }
}

/// Finds the individual with the lowest price.
fn find_best(population: &[Chromosome]) -> &Chromosome {
    population
        .iter()
        .min_by(|a, b| {
            a.price()
                .partial_cmp(&b.price())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}
