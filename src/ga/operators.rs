//! Genetic operators over index permutations.
//!
//! Free functions on `&[usize]` orderings: initialization, parent
//! selection, crossover, and mutation. All assume minimization — lower
//! tour price is better.

use rand::Rng;

use super::chromosome::Chromosome;

/// Uniformly random permutation of `0..n` (Fisher–Yates shuffle).
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        perm.swap(i, j);
    }
    perm
}

/// Tournament selection: sample `k` individuals uniformly with
/// replacement, return the index of the cheapest.
///
/// Sampling with replacement means one individual can fill several
/// tournament slots. Raising `k` toward the population size steepens
/// selection pressure toward the current best.
///
/// # Complexity
///
/// O(k) per selection.
///
/// # Panics
///
/// Panics if `population` is empty or `k` is zero; both are rejected
/// upstream by [`GaConfig::validate`](super::GaConfig::validate).
pub fn tournament<R: Rng>(population: &[Chromosome], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from an empty population"
    );
    assert!(k > 0, "tournament needs at least one entrant");

    let n = population.len();
    let mut best = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].price() < population[best].price() {
            best = idx;
        }
    }
    best
}

/// Prefix-ordered crossover.
///
/// Picks a random cut point `k` in `[0, len)`, copies `parent1[..k]`
/// verbatim, then appends `parent2[k..]` in parent2's order, skipping
/// anything the child already holds. Whatever is still missing afterwards
/// is appended in parent1's original order — that final pass is what
/// guarantees a complete permutation even though the two scan ranges
/// overlap.
///
/// # Complexity
///
/// O(n) time, O(n) space.
///
/// # Panics
///
/// Panics if the parents are empty or differ in length.
pub fn prefix_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let cut = rng.random_range(0..n);
    let mut child = Vec::with_capacity(n);
    let mut taken = vec![false; n];

    for &gene in &parent1[..cut] {
        child.push(gene);
        taken[gene] = true;
    }
    for &gene in &parent2[cut..] {
        if !taken[gene] {
            child.push(gene);
            taken[gene] = true;
        }
    }
    for &gene in parent1 {
        if !taken[gene] {
            child.push(gene);
            taken[gene] = true;
        }
    }

    child
}

/// Scramble mutation: one full pass over the ordering, swapping every
/// position with a uniformly random index over the whole array.
///
/// Deliberately not Fisher–Yates: `j` ranges over all of `[0, len)` at
/// every step, so self-swaps happen and already-processed slots can be
/// disturbed again. The perturbation is much stronger than a single
/// swap, which is why [`GaConfig`](super::GaConfig) pairs it with a low
/// mutation rate.
///
/// # Complexity
///
/// O(n).
pub fn scramble_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    for i in 0..n {
        let j = rng.random_range(0..n);
        perm.swap(i, j);
    }
}
