//! Column layout for checkbox grids

/// Split `items` into contiguous columns of `ceil(n / columns)` entries.
///
/// Order is preserved within and across columns. Fewer than `columns`
/// chunks come back when the list does not fill every column.
pub fn partition_columns<T>(items: &[T], columns: usize) -> Vec<&[T]> {
    if items.is_empty() || columns == 0 {
        return Vec::new();
    }
    let per_column = items.len().div_ceil(columns);
    items.chunks(per_column).collect()
}
