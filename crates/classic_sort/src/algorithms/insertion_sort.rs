use crate::cursor::{Cursor, Sequence, range_len};

/// Sorts `[front, back)` in place with binary insertion sort.
///
/// Stable. *O*(*n* log *n*) comparisons, *O*(*n*^2) moves.
///
/// Each new element is carried down to its insertion point by adjacent swaps
/// rather than shifting the tail and writing the element once. That costs
/// about three moves per step instead of one, and in exchange the element type
/// needs no `Clone` bound.
pub fn insertion_sort<S, C>(seq: &mut S, front: C, back: C)
where
    S: Sequence<C> + ?Sized,
    S::Item: Ord,
    C: Cursor,
{
    insertion_sort_by(seq, front, back, &mut |a: &S::Item, b: &S::Item| a < b);
}

pub fn insertion_sort_by<S, C, F>(seq: &mut S, front: C, back: C, is_less: &mut F)
where
    S: Sequence<C> + ?Sized,
    C: Cursor,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if range_len(front, back) < 2 {
        return;
    }

    let mut unsorted = front.next();
    while unsorted < back {
        let insert_at = upper_bound(&*seq, front, unsorted, is_less);

        // Rotate the new element down into place.
        let mut hole = unsorted;
        while hole > insert_at {
            let prev = hole.prev();
            <S as Sequence<C>>::swap(seq, prev, hole);
            hole = prev;
        }

        unsorted = unsorted.next();
    }
}

/// Leftmost position in the sorted range `[front, key)` whose element is
/// greater than the element at `key`.
fn upper_bound<S, C, F>(seq: &S, front: C, key: C, is_less: &mut F) -> C
where
    S: Sequence<C> + ?Sized,
    C: Cursor,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut lo = front;
    let mut hi = key;
    while lo != hi {
        let mid = lo.advance(hi.distance_from(lo) / 2);
        if is_less(<S as Sequence<C>>::at(seq, key), <S as Sequence<C>>::at(seq, mid)) {
            hi = mid;
        } else {
            lo = mid.next();
        }
    }
    lo
}
