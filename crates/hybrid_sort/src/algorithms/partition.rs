use crate::{ScanSide, SortError};

/// Hoare partition around a (possibly synthetic) pivot value.
///
/// Returns `q` such that `data[..=q] <= pivot <= data[q + 1..]`. Cursors start
/// on the first and last element and never leave the slice: a scan that would
/// run off either end reports [`SortError::ScanOverrun`] instead.
#[inline]
pub fn partition_hoare<T: Ord>(data: &mut [T], pivot: &T) -> Result<usize, SortError> {
    debug_assert!(!data.is_empty());

    let len = data.len();
    let last = len - 1;
    let mut i = 0usize;
    let mut j = last;

    loop {
        while data[i] < *pivot {
            if i == last {
                return Err(SortError::ScanOverrun {
                    side: ScanSide::Left,
                    len,
                });
            }
            i += 1;
        }

        while data[j] > *pivot {
            if j == 0 {
                return Err(SortError::ScanOverrun {
                    side: ScanSide::Right,
                    len,
                });
            }
            j -= 1;
        }

        if i >= j {
            return Ok(j);
        }

        data.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Dutch-flag split into `< pivot`, `== pivot`, `> pivot`; returns `(lt, gt)`.
#[inline]
pub fn partition_3way<T: Ord>(data: &mut [T], pivot: &T) -> (usize, usize) {
    let mut lt = 0usize;
    let mut i = 0usize;
    let mut gt = data.len();

    while i < gt {
        if data[i] < *pivot {
            data.swap(i, lt);
            i += 1;
            lt += 1;
        } else if data[i] > *pivot {
            gt -= 1;
            data.swap(i, gt);
        } else {
            i += 1;
        }
    }

    (lt, gt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hoare_split(data: &[i32], pivot: i32, q: usize) {
        assert!(q < data.len());
        assert!(data[..=q].iter().all(|&x| x <= pivot), "left={:?}", &data[..=q]);
        assert!(data[q + 1..].iter().all(|&x| x >= pivot), "right={:?}", &data[q + 1..]);
    }

    #[test]
    fn hoare_splits_around_synthetic_pivot() {
        let mut data = vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0, 10, -1];
        let q = partition_hoare(&mut data, &4).unwrap();
        assert_hoare_split(&data, 4, q);
        assert!(q + 1 < data.len());

        let mut sorted = data.clone();
        sorted.sort();
        assert_eq!(sorted, vec![-1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn hoare_on_equal_keys_meets_in_the_middle() {
        let mut data = vec![7; 12];
        let q = partition_hoare(&mut data, &7).unwrap();
        assert_eq!(q, 5);
    }

    #[test]
    fn hoare_with_unique_maximum_pivot_makes_no_progress() {
        let mut data = vec![1, 2, 3, 9];
        assert_eq!(partition_hoare(&mut data, &9), Ok(3));
    }

    #[test]
    fn hoare_rejects_pivot_outside_values() {
        let mut data = vec![1, 2, 3, 4];
        assert_eq!(
            partition_hoare(&mut data, &100),
            Err(SortError::ScanOverrun {
                side: ScanSide::Left,
                len: 4,
            })
        );

        let mut data = vec![10, 20, 30];
        assert_eq!(
            partition_hoare(&mut data, &-5),
            Err(SortError::ScanOverrun {
                side: ScanSide::Right,
                len: 3,
            })
        );
    }

    #[test]
    fn three_way_groups_equal_keys() {
        let mut data = vec![3, 1, 2, 3, 4, 3, 0, 5];
        let (lt, gt) = partition_3way(&mut data, &3);
        assert_eq!((lt, gt), (3, 6));
        assert!(data[..lt].iter().all(|&x| x < 3));
        assert!(data[lt..gt].iter().all(|&x| x == 3));
        assert!(data[gt..].iter().all(|&x| x > 3));
    }
}
