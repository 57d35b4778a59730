/// Recursive quicksort, median-of-three pivot, single forward partition scan.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    quicksort(v, &mut is_less);
}

fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return;
    }

    let pivot = partition(v, is_less);
    quicksort(&mut v[..pivot], is_less);
    quicksort(&mut v[(pivot + 1)..], is_less);
}

/// Reorders `v` so everything less than the pivot precedes it and returns the
/// pivot's final index. The pivot is the median of the first, middle and last
/// element; when the extremes compare equal the tie breaks to the first
/// element. The chosen pivot is parked at the end before the scan.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let last = v.len() - 1;
    let middle = v.len() / 2;

    let pivot = if is_less(&v[0], &v[middle]) {
        if is_less(&v[middle], &v[last]) {
            middle
        } else if is_less(&v[0], &v[last]) {
            last
        } else {
            0
        }
    } else if is_less(&v[last], &v[middle]) {
        middle
    } else if is_less(&v[last], &v[0]) {
        last
    } else {
        0
    };

    if pivot != last {
        v.swap(pivot, last);
    }

    let mut store = 0;
    for j in 0..last {
        if is_less(&v[j], &v[last]) {
            v.swap(store, j);
            store += 1;
        }
    }

    v.swap(store, last);
    store
}
