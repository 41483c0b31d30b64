use crate::cursor::{Cursor, Sequence, range_len};
use crate::skip_cursor::SkipCursor;

use super::gaps::sedgewick_gaps;
use super::insertion_sort::insertion_sort_by;

/// Sorts `[front, back)` in place with Shell sort over Sedgewick's gaps.
///
/// Each pass runs [`insertion_sort_by`] over the strided sub-sequences
/// `front + o, front + o + g, ...` for every offset `o < g`. The last pass has
/// gap 1. Not stable.
pub fn shell_sort<S, C>(seq: &mut S, front: C, back: C)
where
    S: Sequence<C> + ?Sized,
    S::Item: Ord,
    C: Cursor,
{
    shell_sort_by(seq, front, back, &mut |a: &S::Item, b: &S::Item| a < b);
}

pub fn shell_sort_by<S, C, F>(seq: &mut S, front: C, back: C, is_less: &mut F)
where
    S: Sequence<C> + ?Sized,
    C: Cursor,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = range_len(front, back);
    if len <= 1 {
        return;
    }

    let gaps = sedgewick_gaps(len - 1);

    // One pair of cursors is repositioned for every pass and offset.
    let mut sub_front = SkipCursor::new(front, 1);
    let mut sub_back = SkipCursor::new(back, 1);
    for &gap in gaps.iter().rev() {
        sub_front.set_spacing(gap as isize);
        sub_back.set_spacing(gap as isize);

        for offset in 0..gap {
            let count = (len - 1 - offset) / gap + 1;
            let first = front.advance(offset as isize);
            sub_front.set(first);
            sub_back.set(first.advance((count * gap) as isize));

            insertion_sort_by::<S, SkipCursor<C>, F>(seq, sub_front, sub_back, is_less);
        }
    }
}
