//! Top-down merge sort that tracks where each sorted run lives.
//!
//! A scratch buffer mirrors the range being sorted. Every recursive call
//! reports whether its sorted output ended up in the original range or at the
//! same offset in the buffer, and the parent picks the merge direction that
//! avoids copying a run back before merging it:
//!
//! | left   | right  | merge into | direction |
//! |--------|--------|------------|-----------|
//! | buffer | buffer | origin     | forward   |
//! | buffer | origin | origin     | forward   |
//! | origin | buffer | origin     | backward  |
//! | origin | origin | buffer     | forward   |
//!
//! The buffer is copied back once, at the top level, only if the final run
//! lives there.

use crate::TUNED_PARAMS;
use crate::cursor::{Cursor, Sequence, range_len};

use super::insertion_sort::insertion_sort_by;

/// Where a sorted run currently lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Residency {
    Origin,
    Buffer,
}

/// Sorts `[front, back)` in place with merge sort.
///
/// Stable. Allocates one scratch buffer of `back - front` elements for the
/// duration of the call.
pub fn merge_sort<S, C>(seq: &mut S, front: C, back: C)
where
    S: Sequence<C> + ?Sized,
    S::Item: Ord + Clone,
    C: Cursor,
{
    merge_sort_by(seq, front, back, &mut |a: &S::Item, b: &S::Item| a < b);
}

pub fn merge_sort_by<S, C, F>(seq: &mut S, front: C, back: C, is_less: &mut F)
where
    S: Sequence<C> + ?Sized,
    S::Item: Clone,
    C: Cursor,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = range_len(front, back);
    if len <= 1 {
        return;
    }

    let mut buffer: Vec<S::Item> = (0..len)
        .map(|i| <S as Sequence<C>>::at(&*seq, front.advance(i as isize)).clone())
        .collect();

    let mut work = Workspace {
        seq: &mut *seq,
        front,
        buffer: &mut buffer,
    };
    if sort_run(&mut work, is_less) == Residency::Buffer {
        for (i, value) in buffer.into_iter().enumerate() {
            <S as Sequence<C>>::put(seq, front.advance(i as isize), value);
        }
    }
}

/// A sub-range of the origin together with the matching slice of the buffer.
struct Workspace<'a, S: ?Sized, C, T> {
    seq: &'a mut S,
    front: C,
    buffer: &'a mut [T],
}

impl<S, C, T> Workspace<'_, S, C, T>
where
    S: Sequence<C, Item = T> + ?Sized,
    C: Cursor,
    T: Clone,
{
    #[inline]
    fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    fn get(&self, place: Residency, index: usize) -> &T {
        match place {
            Residency::Origin => {
                <S as Sequence<C>>::at(&*self.seq, self.front.advance(index as isize))
            }
            Residency::Buffer => &self.buffer[index],
        }
    }

    #[inline]
    fn put(&mut self, place: Residency, index: usize, value: T) {
        match place {
            Residency::Origin => {
                <S as Sequence<C>>::put(&mut *self.seq, self.front.advance(index as isize), value)
            }
            Residency::Buffer => self.buffer[index] = value,
        }
    }

    #[inline]
    fn copy(&mut self, from: Residency, src: usize, to: Residency, dst: usize) {
        let value = self.get(from, src).clone();
        self.put(to, dst, value);
    }

    fn sub(&mut self, start: usize, end: usize) -> Workspace<'_, S, C, T> {
        Workspace {
            seq: &mut *self.seq,
            front: self.front.advance(start as isize),
            buffer: &mut self.buffer[start..end],
        }
    }
}

fn sort_run<S, C, T, F>(work: &mut Workspace<'_, S, C, T>, is_less: &mut F) -> Residency
where
    S: Sequence<C, Item = T> + ?Sized,
    C: Cursor,
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = work.len();
    if len <= TUNED_PARAMS.insertion_threshold {
        let back = work.front.advance(len as isize);
        insertion_sort_by(&mut *work.seq, work.front, back, is_less);
        return Residency::Origin;
    }

    let mid = len / 2;
    let left = sort_run(&mut work.sub(0, mid), is_less);
    let right = sort_run(&mut work.sub(mid, len), is_less);
    merge(work, mid, left, right, is_less)
}

/// Merges the sorted runs `[0, mid)` and `[mid, len)` and returns where the
/// merged run lives.
fn merge<S, C, T, F>(
    work: &mut Workspace<'_, S, C, T>,
    mid: usize,
    left: Residency,
    right: Residency,
    is_less: &mut F,
) -> Residency
where
    S: Sequence<C, Item = T> + ?Sized,
    C: Cursor,
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    match (left, right) {
        (Residency::Origin, Residency::Origin) => {
            merge_forward(work, mid, left, right, Residency::Buffer, is_less);
            Residency::Buffer
        }
        // Writing forward would overwrite the unread left run.
        (Residency::Origin, Residency::Buffer) => {
            merge_backward(work, mid, is_less);
            Residency::Origin
        }
        (Residency::Buffer, _) => {
            merge_forward(work, mid, left, right, Residency::Origin, is_less);
            Residency::Origin
        }
    }
}

/// Merges front to back. Ties go to the left run.
fn merge_forward<S, C, T, F>(
    work: &mut Workspace<'_, S, C, T>,
    mid: usize,
    left: Residency,
    right: Residency,
    dest: Residency,
    is_less: &mut F,
) where
    S: Sequence<C, Item = T> + ?Sized,
    C: Cursor,
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = work.len();
    let mut i = 0;
    let mut j = mid;
    let mut k = 0;

    while i < mid && j < len {
        if is_less(work.get(right, j), work.get(left, i)) {
            work.copy(right, j, dest, k);
            j += 1;
        } else {
            work.copy(left, i, dest, k);
            i += 1;
        }
        k += 1;
    }

    while i < mid {
        work.copy(left, i, dest, k);
        i += 1;
        k += 1;
    }

    // The rest of the right run is already in place.
    if right == dest {
        return;
    }
    while j < len {
        work.copy(right, j, dest, k);
        j += 1;
        k += 1;
    }
}

/// Merges the left run in the origin with the right run in the buffer, back
/// to front, into the origin. Ties go to the left run.
fn merge_backward<S, C, T, F>(work: &mut Workspace<'_, S, C, T>, mid: usize, is_less: &mut F)
where
    S: Sequence<C, Item = T> + ?Sized,
    C: Cursor,
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut i = mid;
    let mut j = work.len();
    let mut k = j;

    while i > 0 && j > mid {
        k -= 1;
        if is_less(work.get(Residency::Buffer, j - 1), work.get(Residency::Origin, i - 1)) {
            i -= 1;
            work.copy(Residency::Origin, i, Residency::Origin, k);
        } else {
            j -= 1;
            work.copy(Residency::Buffer, j, Residency::Origin, k);
        }
    }

    // Whatever is left of the left run is already in place.
    while j > mid {
        j -= 1;
        k -= 1;
        work.copy(Residency::Buffer, j, Residency::Origin, k);
    }
}
