pub(crate) mod classic;
pub(crate) mod hybrid;
pub(crate) mod insertion_sort;
pub(crate) mod manual_sort;
pub(crate) mod partition;
pub(crate) mod pivot;
