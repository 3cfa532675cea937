/*
In-place heap sort over a binary max-heap.

The heap is built bottom-up from the last parent down to the root, then the root (the current
maximum) is repeatedly swapped behind the shrinking heap. Not stable.
*/

use std::cmp::Ordering;

pub fn heap_sort<T: Ord>(v: &mut [T]) {
    heap_sort_by(v, T::cmp);
}

pub fn heap_sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    heap_sort_by(v, |a, b| f(a).cmp(&f(b)));
}

/// Sorts ascending under `compare`, which must be a total order.
pub fn heap_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    build_max_heap_by(v, &mut compare);
    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(v, end, 0, &mut compare);
    }
}

pub fn build_max_heap<T: Ord>(v: &mut [T]) {
    build_max_heap_by(v, T::cmp);
}

pub fn build_max_heap_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = v.len();
    for parent in (0..n / 2).rev() {
        sift_down(v, n, parent, &mut compare);
    }
}

pub fn is_max_heap_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    (1..v.len()).all(|child| compare(&v[(child - 1) / 2], &v[child]) != Ordering::Less)
}

// Restores heap order below `parent`, looking only at the first `heap_size` elements.
fn sift_down<T, F>(v: &mut [T], heap_size: usize, mut parent: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * parent + 1;
        let right = left + 1;
        if left >= heap_size {
            break;
        }
        let mut larger = left;
        if right < heap_size && compare(&v[right], &v[left]) == Ordering::Greater {
            larger = right;
        }
        if compare(&v[larger], &v[parent]) != Ordering::Greater {
            break;
        }
        v.swap(parent, larger);
        parent = larger;
    }
}
