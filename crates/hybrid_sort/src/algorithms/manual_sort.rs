/// Fixed compare-and-swap network for sub-ranges of at most three elements.
#[inline]
pub fn manual_sort<T: Ord>(data: &mut [T]) {
    match data.len() {
        0 | 1 => {}
        2 => compare_swap(data, 0, 1),
        3 => {
            compare_swap(data, 0, 1);
            compare_swap(data, 0, 2);
            compare_swap(data, 1, 2);
        }
        n => unreachable!("manual sort called on {n} elements"),
    }
}

#[inline(always)]
fn compare_swap<T: Ord>(data: &mut [T], a: usize, b: usize) {
    if data[a] > data[b] {
        data.swap(a, b);
    }
}
