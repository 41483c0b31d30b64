//! Positions and element access for random-access sequences.
//!
//! A range is a pair of cursors `[front, back)`. Cursors are plain `Copy`
//! values that know how to move and measure distances; reading and writing
//! elements goes through the [`Sequence`] that owns them. Keeping the two apart
//! lets a cursor be wrapped (see [`SkipCursor`](crate::SkipCursor)) without
//! aliasing the storage.

use std::collections::VecDeque;

/// A random-access position.
///
/// Implementations must satisfy, for every cursor `a` and offsets `n`, `m`:
///
/// - `a.advance(n).advance(-n) == a`
/// - `a.advance(n).advance(m) == a.advance(n + m)`
/// - `a.advance(n).distance_from(a) == n`
/// - `a < a.advance(1)`
pub trait Cursor: Copy + PartialEq + PartialOrd {
    /// Moves `n` steps; negative values move backward.
    fn advance(self, n: isize) -> Self;

    /// Signed number of steps from `origin` to `self`.
    fn distance_from(self, origin: Self) -> isize;

    #[inline]
    fn next(self) -> Self {
        self.advance(1)
    }

    #[inline]
    fn prev(self) -> Self {
        self.advance(-1)
    }
}

impl Cursor for usize {
    #[inline]
    fn advance(self, n: isize) -> Self {
        self.wrapping_add_signed(n)
    }

    #[inline]
    fn distance_from(self, origin: Self) -> isize {
        self.wrapping_sub(origin) as isize
    }
}

/// Storage addressable through cursors of type `C`.
pub trait Sequence<C: Cursor> {
    type Item;

    fn at(&self, cursor: C) -> &Self::Item;

    fn at_mut(&mut self, cursor: C) -> &mut Self::Item;

    fn swap(&mut self, a: C, b: C);

    /// Overwrites the element at `cursor`.
    #[inline]
    fn put(&mut self, cursor: C, value: Self::Item) {
        *self.at_mut(cursor) = value;
    }
}

impl<T> Sequence<usize> for [T] {
    type Item = T;

    #[inline]
    fn at(&self, cursor: usize) -> &T {
        &self[cursor]
    }

    #[inline]
    fn at_mut(&mut self, cursor: usize) -> &mut T {
        &mut self[cursor]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T> Sequence<usize> for Vec<T> {
    type Item = T;

    #[inline]
    fn at(&self, cursor: usize) -> &T {
        &self[cursor]
    }

    #[inline]
    fn at_mut(&mut self, cursor: usize) -> &mut T {
        &mut self[cursor]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Sequence<usize> for VecDeque<T> {
    type Item = T;

    #[inline]
    fn at(&self, cursor: usize) -> &T {
        &self[cursor]
    }

    #[inline]
    fn at_mut(&mut self, cursor: usize) -> &mut T {
        &mut self[cursor]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

/// Number of elements in `[front, back)`.
#[inline]
pub fn range_len<C: Cursor>(front: C, back: C) -> usize {
    let len = back.distance_from(front);
    debug_assert!(len >= 0, "back must be reachable from front");
    len.max(0) as usize
}
