pub(crate) mod data;
mod merged_scan;
