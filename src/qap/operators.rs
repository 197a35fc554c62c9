//! Permutation operators for the QAP encoding.
//!
//! All operators preserve the permutation invariant by construction: a
//! chromosome's genotype is always a permutation of `0..n`.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains" (OX)

use crate::ga::{Chromosome, ChromosomeFactory, CrossingFunction, MutationOperator};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generates independent random assignments of a fixed size.
///
/// Each chromosome starts as the identity sequence `0..size`, uniformly
/// shuffled, with fitness 0 (not yet evaluated).
#[derive(Debug, Clone, Copy)]
pub struct RandomAssignment {
    size: usize,
}

impl RandomAssignment {
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl ChromosomeFactory<Vec<usize>> for RandomAssignment {
    fn create<R: Rng>(&self, rng: &mut R) -> Chromosome<Vec<usize>> {
        let mut locations: Vec<usize> = (0..self.size).collect();
        locations.shuffle(rng);
        Chromosome::new(locations, 0)
    }
}

/// Draws cut indices `left <= right`, both uniform in `[0, len]`.
fn random_cuts<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..=len);
    let b = rng.random_range(0..=len);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Builds one order-crossover child.
///
/// The child takes `segment_parent`'s values verbatim in `[left, right)`;
/// positions `[0, left)` then `[right, len)` are filled with
/// `fill_parent`'s values that are absent from the segment, in
/// `fill_parent` order.
fn ox_child(segment_parent: &[usize], fill_parent: &[usize], left: usize, right: usize) -> Vec<usize> {
    let len = segment_parent.len();
    let mut child = vec![0usize; len];
    let mut in_segment = vec![false; len];

    child[left..right].copy_from_slice(&segment_parent[left..right]);
    for &location in &segment_parent[left..right] {
        in_segment[location] = true;
    }

    let mut unused = fill_parent
        .iter()
        .copied()
        .filter(|location| !in_segment[*location]);
    for position in (0..left).chain(right..len) {
        child[position] = unused
            .next()
            .expect("parents must be permutations of the same index set");
    }

    child
}

/// Order crossover (OX).
///
/// Both offspring copy a segment from `parent1` and fill from `parent2`,
/// with cut indices drawn independently per offspring.
#[derive(Debug, Clone, Copy)]
pub struct OrderCrossing;

impl CrossingFunction<Vec<usize>> for OrderCrossing {
    fn cross<R: Rng>(
        &self,
        parent1: &Chromosome<Vec<usize>>,
        parent2: &Chromosome<Vec<usize>>,
        rng: &mut R,
    ) -> (Chromosome<Vec<usize>>, Chromosome<Vec<usize>>) {
        let len = parent1.genotype.len();
        let child = |rng: &mut R| {
            let (left, right) = random_cuts(len, rng);
            Chromosome::new(ox_child(&parent1.genotype, &parent2.genotype, left, right), 0)
        };
        (child(rng), child(rng))
    }
}

/// Symmetric order crossover.
///
/// One shared pair of cut indices for both offspring: child one takes
/// `parent1`'s segment and fills from `parent2`, child two takes
/// `parent2`'s segment and fills from `parent1`. The offspring are
/// structurally correlated and only one random draw is spent.
#[derive(Debug, Clone, Copy)]
pub struct SymmetricOrderCrossing;

impl CrossingFunction<Vec<usize>> for SymmetricOrderCrossing {
    fn cross<R: Rng>(
        &self,
        parent1: &Chromosome<Vec<usize>>,
        parent2: &Chromosome<Vec<usize>>,
        rng: &mut R,
    ) -> (Chromosome<Vec<usize>>, Chromosome<Vec<usize>>) {
        let (left, right) = random_cuts(parent1.genotype.len(), rng);
        let first = ox_child(&parent1.genotype, &parent2.genotype, left, right);
        let second = ox_child(&parent2.genotype, &parent1.genotype, left, right);
        (Chromosome::new(first, 0), Chromosome::new(second, 0))
    }
}

/// Swap mutation: exchange the values at two uniform positions.
///
/// The two draws may coincide, yielding a no-op.
#[derive(Debug, Clone, Copy)]
pub struct SwapMutation;

impl MutationOperator<Vec<usize>> for SwapMutation {
    fn apply<R: Rng>(&self, chromosome: &mut Chromosome<Vec<usize>>, rng: &mut R) {
        let len = chromosome.genotype.len();
        if len == 0 {
            return;
        }
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        chromosome.genotype.swap(a, b);
    }
}
