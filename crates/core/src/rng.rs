//! RNG module - 7-bag random piece generation
//!
//! Each bag contains one of each piece (I, O, T, S, Z, J, L), shuffled with an
//! unbiased Fisher-Yates pass. Pieces are popped from the end of the bag until it is
//! empty, then a fresh bag is shuffled. Bag-aligned runs of seven draws therefore hold
//! every kind exactly once; across a bag boundary a kind may repeat back to back.
//!
//! The random source is injected so games are reproducible from a seed.

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::PieceKind;

/// Pieces per bag.
pub const BAG_SIZE: usize = PieceKind::ALL.len();

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct BagRandomizer<R = ChaCha8Rng> {
    /// Remaining pieces of the current bag; the next draw is the last element.
    bag: ArrayVec<PieceKind, BAG_SIZE>,
    /// RNG for shuffling
    rng: R,
}

impl BagRandomizer<ChaCha8Rng> {
    /// Create a randomizer whose sequence is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> BagRandomizer<R> {
    /// Create a randomizer drawing from `rng`. The first bag is shuffled lazily.
    pub fn with_rng(rng: R) -> Self {
        Self {
            bag: ArrayVec::new(),
            rng,
        }
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = ArrayVec::from(PieceKind::ALL);
        self.bag.shuffle(&mut self.rng);
    }

    /// Draw the next piece, refilling the bag first when it is empty.
    pub fn next(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.refill_bag();
        }
        match self.bag.pop() {
            Some(kind) => kind,
            None => unreachable!("bag refilled with {BAG_SIZE} pieces"),
        }
    }

    /// Pieces left in the current bag, in draw order reversed.
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag
    }
}

impl Default for BagRandomizer<ChaCha8Rng> {
    fn default() -> Self {
        Self::new(1)
    }
}
