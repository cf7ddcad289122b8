/// Integer keys with an exact arithmetic mean.
///
/// Means are computed in `i128`, which holds every value of the implementing
/// types and any realistic sum of them. `narrow` is only ever handed a value
/// already clamped into `[min, max]` of real elements, so the conversion back
/// is lossless.
pub trait MeanKey: Ord + Copy {
    fn widen(self) -> i128;
    fn narrow(wide: i128) -> Self;
}

macro_rules! impl_mean_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl MeanKey for $t {
                #[inline(always)]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline(always)]
                fn narrow(wide: i128) -> Self {
                    debug_assert!(wide >= <$t>::MIN as i128 && wide <= <$t>::MAX as i128);
                    wide as $t
                }
            }
        )*
    };
}

impl_mean_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

struct HalfSummary {
    sum: i128,
    len: i128,
    min: i128,
    max: i128,
}

#[inline]
fn summarize<T: MeanKey>(half: &[T]) -> HalfSummary {
    debug_assert!(!half.is_empty());
    let first = half[0].widen();
    let mut summary = HalfSummary {
        sum: 0,
        len: half.len() as i128,
        min: first,
        max: first,
    };
    for &x in half {
        let v = x.widen();
        summary.sum += v;
        summary.min = summary.min.min(v);
        summary.max = summary.max.max(v);
    }
    summary
}

/// `floor((mean(left) + mean(right)) / 2)` over the two halves split at
/// `mid = (len - 1) / 2`, clamped into the sub-range's value bounds.
pub fn half_means<T: MeanKey>(data: &[T]) -> T {
    debug_assert!(data.len() >= 2);
    let mid = (data.len() - 1) / 2;
    let (left, right) = data.split_at(mid + 1);
    let l = summarize(left);
    let r = summarize(right);

    // Split each mean into whole and fractional part. The fractions sum to
    // [0, 2) and only round the average up when the whole parts sum is odd.
    let whole = l.sum.div_euclid(l.len) + r.sum.div_euclid(r.len);
    let fraction_reaches_one =
        l.sum.rem_euclid(l.len) * r.len + r.sum.rem_euclid(r.len) * l.len >= l.len * r.len;
    let carry = i128::from(fraction_reaches_one) * whole.rem_euclid(2);
    let pivot = (whole + carry).div_euclid(2);

    T::narrow(pivot.clamp(l.min.min(r.min), l.max.max(r.max)))
}

/// Average of the midranges of `{first, just-left-of-middle}` and
/// `{middle, last}`. Four reads per step instead of a full scan.
pub fn sampled_midrange<T: MeanKey>(data: &[T]) -> T {
    debug_assert!(data.len() >= 3);
    let len = data.len();
    let mid = (len - 1) / 2;
    let midrange = |a: T, b: T| (a.widen() + b.widen()).div_euclid(2);
    let left = midrange(data[0], data[mid - 1]);
    let right = midrange(data[mid], data[len - 1]);
    T::narrow((left + right).div_euclid(2))
}

#[inline]
pub fn median3<T: Ord>(a: &T, b: &T, c: &T) -> usize {
    if a < b {
        if b < c {
            1
        } else if a < c {
            2
        } else {
            0
        }
    } else if a < c {
        0
    } else if b < c {
        2
    } else {
        1
    }
}

/// Median of the first, middle and last elements; always a member of `data`.
pub fn median_of_3<T: Ord + Clone>(data: &[T]) -> T {
    debug_assert!(!data.is_empty());
    let positions = [0, data.len() / 2, data.len() - 1];
    let [a, b, c] = positions.map(|i| &data[i]);
    data[positions[median3(a, b, c)]].clone()
}
