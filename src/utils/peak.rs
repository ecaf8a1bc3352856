use crate::float::Float;

/// Index and value of the smallest element of `arr`. Ties resolve to the
/// first occurrence. Returns `None` for an empty slice.
pub fn first_min<T: Float>(arr: &[T]) -> Option<(usize, T)> {
    first_extremum(arr, |candidate, best| candidate < best)
}

/// Index and value of the largest element of `arr`. Ties resolve to the
/// first occurrence. Returns `None` for an empty slice.
pub fn first_max<T: Float>(arr: &[T]) -> Option<(usize, T)> {
    first_extremum(arr, |candidate, best| candidate > best)
}

fn first_extremum<T, F>(arr: &[T], better: F) -> Option<(usize, T)>
where
    T: Float,
    F: Fn(T, T) -> bool,
{
    let (&first, rest) = arr.split_first()?;
    let best = rest
        .iter()
        .enumerate()
        .fold((0, first), |(best_idx, best_val), (i, &val)| {
            if better(val, best_val) {
                (i + 1, val)
            } else {
                (best_idx, best_val)
            }
        });
    Some(best)
}
