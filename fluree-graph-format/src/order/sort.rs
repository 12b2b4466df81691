//! Stable merge sort over caller-supplied comparators.
//!
//! The structural comparators are not guaranteed to be a strict total order
//! on every input (cyclic blank structures can tie in one direction only).
//! `slice::sort_by` may panic on such comparators; this sort never does and
//! gives the same result for the same input sequence.

use std::cmp::Ordering;

/// Sort `items` stably with `compare`.
pub fn merge_sort_by<T, F>(items: &mut Vec<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }
    let input = std::mem::take(items);
    *items = sort_run(input, &mut compare);
}

fn sort_run<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = sort_run(items, compare);
    let right = sort_run(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }
    merged
}

/// Index of the item to write next from the front of a sorted slice.
///
/// The leading run of items that `tied` links pairwise is searched for the
/// minimum under `tiebreak`; the first minimum wins. Callers re-run this
/// after every write, since a write can change what `tiebreak` sees.
pub fn pick_next<T, F, G>(items: &[T], mut tied: F, mut tiebreak: G) -> usize
where
    F: FnMut(&T, &T) -> bool,
    G: FnMut(&T, &T) -> Ordering,
{
    let run = 1 + items
        .windows(2)
        .take_while(|pair| tied(&pair[0], &pair[1]))
        .count();
    (0..run.min(items.len()))
        .min_by(|&i, &j| tiebreak(&items[i], &items[j]))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts() {
        let mut v = vec![5, 3, 9, 1, 1, 0, 7];
        merge_sort_by(&mut v, |a, b| a.cmp(b));
        assert_eq!(v, vec![0, 1, 1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_stable() {
        let mut v = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        merge_sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_eq!(v, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn test_pick_next_searches_leading_tie_run() {
        let items = [(0, 'c'), (0, 'a'), (0, 'b'), (1, 'a')];
        let pick = pick_next(&items, |x, y| x.0 == y.0, |x, y| x.1.cmp(&y.1));
        assert_eq!(pick, 1);

        // Nothing tied: the front item
        let items = [(0, 'z'), (1, 'a')];
        assert_eq!(pick_next(&items, |x, y| x.0 == y.0, |x, y| x.1.cmp(&y.1)), 0);

        // First minimum wins
        let items = [(0, 'a'), (0, 'a')];
        assert_eq!(pick_next(&items, |_, _| true, |_, _| Ordering::Equal), 0);
    }

    #[test]
    fn test_inconsistent_comparator_does_not_panic() {
        let mut v: Vec<u32> = (0..50).collect();
        merge_sort_by(&mut v, |a, b| if (a + b) % 3 == 0 { Ordering::Less } else { Ordering::Greater });
        assert_eq!(v.len(), 50);
    }
}
