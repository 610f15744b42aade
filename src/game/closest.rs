use crate::game::board::Spot;

/// Returns the element of `sorted` nearest to `num`.
///
/// `sorted` must be non-empty and ascending. Values outside the range clamp to
/// the first or last element; on an exact tie the lower element wins.
pub fn closest(sorted: &[Spot], num: Spot) -> Spot {
    let pos = sorted.partition_point(|&s| s < num);
    if pos == 0 {
        return sorted[0];
    }
    if pos == sorted.len() {
        return sorted[sorted.len() - 1];
    }
    let before = sorted[pos - 1];
    let after = sorted[pos];
    if after - num < num - before {
        after
    } else {
        before
    }
}
