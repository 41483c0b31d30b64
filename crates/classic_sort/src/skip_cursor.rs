//! Strided views over random-access sequences.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::cursor::{Cursor, Sequence};

/// A cursor whose single step is `spacing` steps of the underlying cursor.
///
/// `SkipCursor` is itself a [`Cursor`], and every [`Sequence<C>`] is also a
/// `Sequence<SkipCursor<C>>`, so an algorithm written for contiguous ranges
/// runs unchanged over the arithmetic sub-sequence `front, front + s,
/// front + 2s, ...`.
///
/// Two skip cursors are only comparable when they share a spacing and point
/// into the same sequence. Equality looks at the underlying position alone.
/// Ordering follows the underlying ordering for positive spacing and is
/// reversed for negative spacing, so `a < a + 1` holds either way, including
/// for a reversed view whose `back` sits just before the first element.
#[derive(Clone, Copy, Debug)]
pub struct SkipCursor<C> {
    inner: C,
    spacing: isize,
}

impl<C: Cursor> SkipCursor<C> {
    pub fn new(inner: C, spacing: isize) -> Self {
        debug_assert_ne!(spacing, 0, "spacing must be non-zero");
        Self { inner, spacing }
    }

    /// Creates a cursor at the default underlying position; call
    /// [`set`](Self::set) before dereferencing it.
    pub fn with_spacing(spacing: isize) -> Self
    where
        C: Default,
    {
        Self::new(C::default(), spacing)
    }

    /// The underlying position.
    #[inline]
    pub fn get(&self) -> C {
        self.inner
    }

    #[inline]
    pub fn set(&mut self, inner: C) {
        self.inner = inner;
    }

    #[inline]
    pub fn spacing(&self) -> isize {
        self.spacing
    }

    #[inline]
    pub fn set_spacing(&mut self, spacing: isize) {
        debug_assert_ne!(spacing, 0, "spacing must be non-zero");
        self.spacing = spacing;
    }

    /// Orders by the sign of the underlying distance, flipped for negative
    /// spacing. Works for positions one past either end of the sequence.
    #[inline]
    fn logical_cmp(&self, other: &Self) -> Ordering {
        let diff = self.inner.distance_from(other.inner);
        if self.spacing < 0 {
            0.cmp(&diff)
        } else {
            diff.cmp(&0)
        }
    }

    /// Underlying position `offset` strided steps away.
    #[inline]
    pub fn nth(&self, offset: isize) -> C {
        self.inner.advance(offset * self.spacing)
    }
}

impl<C: Cursor + Default> Default for SkipCursor<C> {
    fn default() -> Self {
        Self::with_spacing(1)
    }
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    #[inline]
    fn advance(self, n: isize) -> Self {
        Self {
            inner: self.nth(n),
            spacing: self.spacing,
        }
    }

    /// Truncates toward zero when the underlying distance is not a multiple of
    /// the spacing.
    #[inline]
    fn distance_from(self, origin: Self) -> isize {
        debug_assert_eq!(self.spacing, origin.spacing);
        self.inner.distance_from(origin.inner) / self.spacing
    }
}

impl<C: PartialEq> PartialEq for SkipCursor<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<C: Eq> Eq for SkipCursor<C> {}

impl<C: Cursor> PartialOrd for SkipCursor<C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.logical_cmp(other))
    }
}

impl<C: Cursor + Ord> Ord for SkipCursor<C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.logical_cmp(other)
    }
}

impl<C: Cursor> Add<isize> for SkipCursor<C> {
    type Output = Self;

    #[inline]
    fn add(self, n: isize) -> Self {
        self.advance(n)
    }
}

impl<C: Cursor> AddAssign<isize> for SkipCursor<C> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        *self = self.advance(n);
    }
}

impl<C: Cursor> Sub<isize> for SkipCursor<C> {
    type Output = Self;

    #[inline]
    fn sub(self, n: isize) -> Self {
        self.advance(-n)
    }
}

impl<C: Cursor> SubAssign<isize> for SkipCursor<C> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        *self = self.advance(-n);
    }
}

impl<C: Cursor> Sub for SkipCursor<C> {
    type Output = isize;

    #[inline]
    fn sub(self, origin: Self) -> isize {
        self.distance_from(origin)
    }
}

impl<S, C> Sequence<SkipCursor<C>> for S
where
    S: Sequence<C> + ?Sized,
    C: Cursor,
{
    type Item = S::Item;

    #[inline]
    fn at(&self, cursor: SkipCursor<C>) -> &Self::Item {
        <S as Sequence<C>>::at(self, cursor.inner)
    }

    #[inline]
    fn at_mut(&mut self, cursor: SkipCursor<C>) -> &mut Self::Item {
        <S as Sequence<C>>::at_mut(self, cursor.inner)
    }

    #[inline]
    fn swap(&mut self, a: SkipCursor<C>, b: SkipCursor<C>) {
        <S as Sequence<C>>::swap(self, a.inner, b.inner);
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn steps_by_spacing() {
        let data: Vec<i32> = (0..20).collect();
        let mut cursor = SkipCursor::new(2_usize, 3);

        assert_eq!(*data.at(cursor), 2);
        cursor += 1;
        assert_eq!(*data.at(cursor), 5);
        cursor = cursor + 2;
        assert_eq!(*data.at(cursor), 11);
        cursor -= 3;
        assert_eq!(*data.at(cursor), 2);
        assert_eq!(data[cursor.nth(4)], 14);
        assert_eq!(*data.at(cursor.next().next().prev()), 5);
    }

    #[test]
    fn writes_land_on_underlying_positions() {
        let mut data = vec![0; 10];
        let front = SkipCursor::new(1_usize, 4);
        data.put(front, 7);
        data.put(front + 2, 9);
        *data.at_mut(front + 1) = 8;
        data.swap(front, front + 1);
        assert_eq!(data, [0, 8, 0, 0, 0, 7, 0, 0, 0, 9]);
    }

    #[test]
    fn set_and_set_spacing_reposition() {
        let data: Vec<i32> = (0..10).collect();
        let mut cursor: SkipCursor<usize> = SkipCursor::default();
        assert_eq!(cursor.spacing(), 1);

        cursor.set_spacing(2);
        cursor.set(3);
        assert_eq!(cursor.get(), 3);
        assert_eq!(*data.at(cursor + 1), 5);

        let mut other: SkipCursor<usize> = SkipCursor::with_spacing(2);
        other.set(9);
        assert_eq!(other - cursor, 3);
        assert_eq!(cursor - other, -3);
    }

    #[test]
    fn comparisons_follow_logical_order() {
        let a = SkipCursor::new(4_usize, 2);
        let b = a + 3;
        assert!(a < b);
        assert!(a <= a);
        assert!(b > a);
        assert_eq!(a + 3, b);
        assert_ne!(a, b);

        let r = SkipCursor::new(9_usize, -2);
        let s = r + 3;
        assert_eq!(s.get(), 3);
        assert!(r < s);
        assert_eq!(s - r, 3);
        assert_eq!(r.cmp(&s), Ordering::Less);
    }

    #[test]
    fn misaligned_distance_truncates() {
        let a = SkipCursor::new(0_usize, 4);
        let b = SkipCursor::new(7_usize, 4);
        assert_eq!(b - a, 1);
    }

    #[quickcheck]
    fn distance_law(start: u8, steps: u8, spacing: u8) -> bool {
        let spacing = isize::from(spacing % 16) + 1;
        let p = usize::from(start);
        let q = p + usize::from(steps) * spacing as usize;
        let vp = SkipCursor::new(p, spacing);
        let vq = SkipCursor::new(q, spacing);
        vq - vp == (q - p) as isize / spacing
    }

    #[quickcheck]
    fn arithmetic_round_trips(start: u8, n: i8, spacing: i8) -> bool {
        let spacing = if spacing == 0 { 1 } else { isize::from(spacing) };
        let a = SkipCursor::new(100_000_usize + usize::from(start), spacing);
        let n = isize::from(n);
        a + n - n == a && (a + n) - a == n && (n <= 0 || a < a + n)
    }
}
