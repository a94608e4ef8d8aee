//! Shared helpers for the integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::marker::PhantomData;

use itertag::{
    BidirectionalIterator, Category, ForwardIterator, InputIterator, IteratorTraits,
    RandomAccessIterator,
};

// =============================================================================
// Type equality
// =============================================================================

pub trait TypeEq<T: ?Sized> {}

impl<T: ?Sized> TypeEq<T> for T {}

/// Compiles only when `A` and `B` are the same type.
pub fn assert_type_eq<A: ?Sized + TypeEq<B>, B: ?Sized>() {}

// =============================================================================
// Probe: an integer position that counts every primitive operation
// =============================================================================

#[derive(Debug, Default)]
pub struct Counts {
    pub steps: Cell<usize>,
    pub back_steps: Cell<usize>,
    pub jumps: Cell<usize>,
    pub subtractions: Cell<usize>,
}

impl Counts {
    fn bump(cell: &Cell<usize>) {
        cell.set(cell.get() + 1);
    }
}

/// Supports every read-side operation; the category `C` decides which ones
/// the dispatched algorithms may use.
#[derive(Debug)]
pub struct Probe<'c, C> {
    pub pos: isize,
    counts: &'c Counts,
    _category: PhantomData<C>,
}

impl<'c, C> Probe<'c, C> {
    pub fn at(pos: isize, counts: &'c Counts) -> Self {
        Self {
            pos,
            counts,
            _category: PhantomData,
        }
    }
}

impl<C> Clone for Probe<'_, C> {
    fn clone(&self) -> Self {
        Self::at(self.pos, self.counts)
    }
}

impl<C> PartialEq for Probe<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<C: Category> IteratorTraits for Probe<'_, C> {
    type Category = C;
    type Value = isize;
    type Difference = isize;
    type Pointer = *const isize;
    type Reference<'a>
        = isize
    where
        Self: 'a;
}

impl<C: Category> InputIterator for Probe<'_, C> {
    fn step(&mut self) {
        Counts::bump(&self.counts.steps);
        self.pos += 1;
    }
}

impl<C: Category> ForwardIterator for Probe<'_, C> {}

impl<C: Category> BidirectionalIterator for Probe<'_, C> {
    fn step_back(&mut self) {
        Counts::bump(&self.counts.back_steps);
        self.pos -= 1;
    }
}

impl<C: Category> RandomAccessIterator for Probe<'_, C> {
    fn jump(&mut self, n: isize) {
        Counts::bump(&self.counts.jumps);
        self.pos += n;
    }

    fn difference_from(&self, origin: &Self) -> isize {
        Counts::bump(&self.counts.subtractions);
        self.pos - origin.pos
    }
}
