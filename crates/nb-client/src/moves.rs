//! Drag-and-drop list moves.
//!
//! Indices are clamped the way a drop target clamps them: past-the-end
//! positions land on the last slot, so a move never panics.

/// Move the item at `from` to position `to` within one list.
pub fn move_item<T>(list: &mut Vec<T>, from: usize, to: usize) {
    let Some(last) = list.len().checked_sub(1) else {
        return;
    };
    let from = from.min(last);
    let to = to.min(last);
    if from == to {
        return;
    }
    let item = list.remove(from);
    list.insert(to, item);
}

/// Move the item at `from` in `source` to position `to` in `target`.
///
/// `to` may equal `target.len()` (append).
pub fn transfer_item<T>(source: &mut Vec<T>, target: &mut Vec<T>, from: usize, to: usize) {
    let Some(last) = source.len().checked_sub(1) else {
        return;
    };
    let item = source.remove(from.min(last));
    let to = to.min(target.len());
    target.insert(to, item);
}
