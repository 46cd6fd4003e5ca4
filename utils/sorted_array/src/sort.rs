//! Quicksort with a middle-element pivot and a three-way (Dutch flag) partition.

use core::cmp::Ordering;

/// Rearranges `slice` around `pivot` into `[< pivot | == pivot | > pivot]`,
/// returning the index of the first equal element and of the first greater one.
fn partition<K: Ord + Copy>(slice: &mut [K], pivot: K) -> (usize, usize) {
    let mut next = 0;
    let mut first_eq = 0;
    let mut first_gt = slice.len();

    while next < first_gt {
        match slice[next].cmp(&pivot) {
            Ordering::Less => {
                slice.swap(first_eq, next);
                first_eq += 1;
                next += 1;
            }
            Ordering::Greater => {
                first_gt -= 1;
                slice.swap(next, first_gt);
            }
            Ordering::Equal => next += 1,
        }
    }

    (first_eq, first_gt)
}

/// Sorts `slice` in ascending order.
///
/// Runs of keys equal to the pivot are settled in a single pass, so inputs
/// with many duplicates don't degrade.
pub fn quick_sort<K: Ord + Copy>(slice: &mut [K]) {
    if slice.len() <= 1 {
        return;
    }

    let pivot = slice[slice.len() / 2];
    let (first_eq, first_gt) = partition(slice, pivot);

    quick_sort(&mut slice[..first_eq]);
    quick_sort(&mut slice[first_gt..]);
}
