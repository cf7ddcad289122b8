#[inline]
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[i] {
            j -= 1;
        }
        // Shift the greater prefix one slot right and drop the key into the gap.
        data[j..=i].rotate_right(1);
    }
}
