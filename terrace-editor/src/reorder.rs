//! The array reorder primitive.

/// Moves the element at `from` to position `to`, preserving the relative
/// order of all other elements.
///
/// Returns a new sequence; the input is never mutated, so the call is safe
/// inside state-update callbacks. A target outside the sequence (negative
/// or past the end) is a no-op, not an error, and returns the input
/// unchanged — the container uses this to ignore "move up" on the first
/// row and "move down" on the last.
#[must_use]
pub fn move_item<T: Clone>(items: &[T], from: usize, to: isize) -> Vec<T> {
    let len = items.len();
    if from >= len || to < 0 || to as usize >= len {
        return items.to_vec();
    }
    let mut out = items.to_vec();
    let element = out.remove(from);
    out.insert(to as usize, element);
    out
}
