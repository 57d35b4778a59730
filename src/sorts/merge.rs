/// Top-down merge sort. Splits at the midpoint into two owned auxiliary
/// buffers and merges them back linearly. Stable, O(n) extra memory.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    merge_sort(v, &mut is_less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    let mut left = v[..mid].to_vec();
    let mut right = v[mid..].to_vec();

    merge_sort(&mut left, is_less);
    merge_sort(&mut right, is_less);

    merge_into(&left, &right, v, is_less);
}

fn merge_into<T, F>(left: &[T], right: &[T], out: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut l = 0;
    let mut r = 0;
    let mut o = 0;

    while l < left.len() && r < right.len() {
        // `!is_less(right, left)` keeps equal elements in left-first order,
        // which is what makes the sort stable.
        if !is_less(&right[r], &left[l]) {
            out[o] = left[l].clone();
            l += 1;
        } else {
            out[o] = right[r].clone();
            r += 1;
        }
        o += 1;
    }

    while l < left.len() {
        out[o] = left[l].clone();
        l += 1;
        o += 1;
    }

    while r < right.len() {
        out[o] = right[r].clone();
        r += 1;
        o += 1;
    }
}
