/// Sorts an integer array with a plain top-down merge sort.
///
/// Every merge allocates a fresh buffer and copies the result back, so this is
/// slower than [`merge_sort`](super::merge_sort::merge_sort) but easy to check.
pub fn merge_sort_array(array: &mut [i32]) {
    let len = array.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    merge_sort_array(&mut array[..mid]);
    merge_sort_array(&mut array[mid..]);
    merge(array, mid);
}

/// Merges the sorted halves `array[..split]` and `array[split..]`.
fn merge(array: &mut [i32], split: usize) {
    let mut merged = Vec::with_capacity(array.len());
    let (left, right) = array.split_at(split);
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if left[i] < right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    array.copy_from_slice(&merged);
}

#[cfg(test)]
mod tests {
    use bench::{default_rng, random_default_list};
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn known_cases() {
        let cases = [
            (vec![], vec![]),
            (vec![1], vec![1]),
            (vec![2, 1], vec![1, 2]),
            (vec![5, 3, 1, 4, 2], vec![1, 2, 3, 4, 5]),
            (vec![i32::MAX, 0, i32::MIN, -1, 0], vec![i32::MIN, -1, 0, 0, i32::MAX]),
        ];
        for (mut input, expected) in cases {
            merge_sort_array(&mut input);
            assert_eq!(input, expected);
        }
    }

    #[test]
    fn merge_interleaves_halves() {
        let mut v = [1, 4, 9, 2, 3, 10];
        merge(&mut v, 3);
        assert_eq!(v, [1, 2, 3, 4, 9, 10]);
    }

    #[test]
    fn random_thousand() {
        let mut v = random_default_list(&mut default_rng(), 1000);
        let mut expected = v.clone();
        expected.sort_unstable();
        merge_sort_array(&mut v);
        assert_eq!(v, expected);
    }

    #[quickcheck]
    fn matches_std(xs: Vec<i32>) -> bool {
        let mut expected = xs.clone();
        expected.sort_unstable();
        let mut actual = xs;
        merge_sort_array(&mut actual);
        actual == expected
    }
}
