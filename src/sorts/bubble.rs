/// Bubble sort, deliberately unoptimized: always runs the full `len` passes
/// over the full range, no early exit and no shrinking tail. Keeps the
/// timing curve a clean function of `len` alone.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for _ in 0..len {
        for j in 0..(len - 1) {
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
            }
        }
    }
}
