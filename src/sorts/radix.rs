use crate::error::Error;

/// LSD radix sort over decimal digits.
///
/// Unlike the comparison sorts this one reads the values themselves, so it is
/// only defined for non-negative integers; any negative element is rejected
/// up front. The number of counting passes is driven by the largest element.
pub fn sort(v: &mut [i64]) -> Result<(), Error> {
    if v.len() < 2 {
        if let Some(&only) = v.first() {
            if only < 0 {
                return Err(Error::NegativeRadixValue(only));
            }
        }
        return Ok(());
    }

    let mut largest = v[0];
    for &val in v.iter() {
        if val < 0 {
            return Err(Error::NegativeRadixValue(val));
        }
        if val > largest {
            largest = val;
        }
    }

    let mut auxiliary = v.to_vec();
    let mut exp: i64 = 1;

    while largest / exp > 0 {
        let mut count = [0usize; 10];

        for &val in v.iter() {
            count[((val / exp) % 10) as usize] += 1;
        }

        for digit in 1..10 {
            count[digit] += count[digit - 1];
        }

        // Walk backwards so the counting pass stays stable.
        for &val in v.iter().rev() {
            let digit = ((val / exp) % 10) as usize;
            count[digit] -= 1;
            auxiliary[count[digit]] = val;
        }

        v.copy_from_slice(&auxiliary);
        exp *= 10;
    }

    Ok(())
}
