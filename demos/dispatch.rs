//! Dispatch walkthrough
//!
//! Runs `distance` and `advance` over the same slice under each category
//! and prints which variant the category selected.
//!
//! Run with: cargo run --example dispatch

use itertag::cursor::{Cursor, Restrict, cursors};
use itertag::dispatch::{AdvanceStrategyOf, DistanceStrategyOf, Strategy};
use itertag::{
    Advance, Bidirectional, Category, Distance, Forward, Input, IteratorTraits, RandomAccess,
    advance, distance,
};

fn show<'a, C>(data: &'a [i32])
where
    C: Category,
    DistanceStrategyOf<C>: Strategy,
    AdvanceStrategyOf<C>: Strategy,
    Restrict<Cursor<'a, i32>, C>: Distance + Advance + IteratorTraits<Difference = isize>,
{
    let (first, last) = cursors(data);
    let first = Restrict::<_, C>::new(first);
    let last = Restrict::<_, C>::new(last);

    let n = distance(first.clone(), last);
    let mut mid = first;
    advance(&mut mid, n / 2);

    println!(
        "{:<14} distance={:<14} advance={:<14} -> len={} middle={:?}",
        C::NAME,
        <DistanceStrategyOf<C> as Strategy>::NAME,
        <AdvanceStrategyOf<C> as Strategy>::NAME,
        n,
        mid.get_ref().peek(),
    );
}

fn main() {
    let data = [1, 2, 3, 4, 5, 6, 7];

    show::<Input>(&data);
    show::<Forward>(&data);
    show::<Bidirectional>(&data);
    show::<RandomAccess>(&data);

    // Raw addresses need no declaration at all.
    let p = data.as_ptr();
    let mut q = p;
    advance(&mut q, 3);
    println!("raw address: distance={} value={}", distance(p, q), unsafe { *q });
}
