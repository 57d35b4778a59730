/// Selection sort. Repeatedly swaps the minimum of the unplaced suffix into
/// place. Minimal number of swaps among the quadratic sorts.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 0..(len - 1) {
        let mut smallest = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[smallest]) {
                smallest = j;
            }
        }
        v.swap(i, smallest);
    }
}
