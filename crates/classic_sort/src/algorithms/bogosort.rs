use rand::Rng;

use crate::cursor::{Cursor, Sequence, range_len};

use super::common::is_sorted_by;

/// Shuffles `[front, back)` until it happens to be sorted.
///
/// Expected *O*(*n* · *n*!) time; only useful as a curiosity and for tiny
/// inputs.
pub fn bogosort<S, C, R>(seq: &mut S, front: C, back: C, rng: &mut R)
where
    S: Sequence<C> + ?Sized,
    S::Item: Ord,
    C: Cursor,
    R: Rng + ?Sized,
{
    bogosort_by(seq, front, back, rng, &mut |a: &S::Item, b: &S::Item| a < b);
}

pub fn bogosort_by<S, C, R, F>(seq: &mut S, front: C, back: C, rng: &mut R, is_less: &mut F)
where
    S: Sequence<C> + ?Sized,
    C: Cursor,
    R: Rng + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    while !is_sorted_by(&*seq, front, back, is_less) {
        shuffle(seq, front, back, rng);
    }
}

/// Fisher-Yates shuffle of `[front, back)`.
pub fn shuffle<S, C, R>(seq: &mut S, front: C, back: C, rng: &mut R)
where
    S: Sequence<C> + ?Sized,
    C: Cursor,
    R: Rng + ?Sized,
{
    let len = range_len(front, back);
    for i in (1..len).rev() {
        let j = rng.random_range(0..=i);
        <S as Sequence<C>>::swap(seq, front.advance(i as isize), front.advance(j as isize));
    }
}

#[cfg(test)]
mod tests {
    use bench::default_rng;

    use super::*;
    use crate::SkipCursor;

    #[test]
    fn sorts_tiny_inputs() {
        let mut rng = default_rng();
        for input in [vec![], vec![1], vec![2, 1], vec![3, -1, 2, 0, 1]] {
            let mut v = input.clone();
            let mut expected = input;
            expected.sort();
            let len = v.len();
            bogosort(&mut v, 0, len, &mut rng);
            assert_eq!(v, expected);
        }
    }

    #[test]
    fn sorts_strided_view() {
        let mut rng = default_rng();
        let mut v = vec![4, 0, 3, 0, 2, 0, 1];
        let front = SkipCursor::new(0_usize, 2);
        bogosort(&mut v, front, front + 4, &mut rng);
        assert_eq!(v, [1, 0, 2, 0, 3, 0, 4]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = default_rng();
        let mut v: Vec<i32> = (0..50).collect();
        shuffle(&mut v, 0_usize, 50, &mut rng);
        assert_ne!(v, (0..50).collect::<Vec<_>>());
        v.sort();
        assert_eq!(v, (0..50).collect::<Vec<_>>());
    }
}
