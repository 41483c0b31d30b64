use crate::cursor::{Cursor, Sequence, range_len};

/// Checks whether `[front, back)` is in ascending order.
pub fn is_sorted<S, C>(seq: &S, front: C, back: C) -> bool
where
    S: Sequence<C> + ?Sized,
    S::Item: Ord,
    C: Cursor,
{
    is_sorted_by(seq, front, back, &mut |a: &S::Item, b: &S::Item| a < b)
}

pub fn is_sorted_by<S, C, F>(seq: &S, front: C, back: C, is_less: &mut F) -> bool
where
    S: Sequence<C> + ?Sized,
    C: Cursor,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if range_len(front, back) < 2 {
        return true;
    }

    let mut current = front;
    let mut next = front.next();
    while next < back {
        if is_less(
            <S as Sequence<C>>::at(seq, next),
            <S as Sequence<C>>::at(seq, current),
        ) {
            return false;
        }
        current = next;
        next = next.next();
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::SkipCursor;

    use super::*;

    #[test]
    fn short_ranges_are_sorted() {
        let empty: [i32; 0] = [];
        assert!(is_sorted(&empty[..], 0_usize, 0));
        assert!(is_sorted(&[7][..], 0_usize, 1));
    }

    #[test]
    fn detects_descents() {
        let data = [1, 2, 2, 5, 3];
        assert!(is_sorted(&data[..], 0_usize, 4));
        assert!(!is_sorted(&data[..], 0_usize, 5));
        assert!(is_sorted(&data[..], 4_usize, 5));
    }

    #[test]
    fn checks_strided_ranges() {
        let data = [1, 9, 2, 0, 3, 8];
        let front = SkipCursor::new(0_usize, 2);
        assert!(is_sorted(&data[..], front, front + 3));
        let odd = SkipCursor::new(1_usize, 2);
        assert!(!is_sorted(&data[..], odd, odd + 3));
    }

    #[test]
    fn custom_order() {
        let data = [5, 4, 4, 1];
        assert!(is_sorted_by(&data[..], 0_usize, 4, &mut |a: &i32, b: &i32| a > b));
    }
}
