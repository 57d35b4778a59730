/// Shell sort with the Knuth gap sequence `g = 3g + 1`.
///
/// The gap is grown from 0 until it reaches the length, then shrunk by `/ 3`
/// before each gapped insertion pass, so the first pass already uses a gap
/// below the length.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    let mut gap: usize = 0;
    while gap < len {
        gap = gap * 3 + 1;
    }

    while gap > 1 {
        gap /= 3;
        for i in gap..len {
            let mut j = i;
            while j >= gap && is_less(&v[j], &v[j - gap]) {
                v.swap(j, j - gap);
                j -= gap;
            }
        }
    }
}
