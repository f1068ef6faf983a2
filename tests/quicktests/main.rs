//! Property tests for the public `Tree` API.

#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod properties;

/// Which strategy to insert a value with.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the value with a loop
    Insert(T),
    /// Insert the value recursively
    InsertRecursive(T),
    /// Remove the value
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::InsertRecursive(T::arbitrary(g)),
            2 => Op::Remove(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
