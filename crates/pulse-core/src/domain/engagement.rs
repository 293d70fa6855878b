//! Pure operations over the embedded engagement sequences.
//!
//! Likes and comments are small ordered lists kept newest first. Every
//! mutation is a find-index-then-splice: an O(n) scan, at most one element
//! removed, and the relative order of all surviving elements preserved.

/// Prepend `item`, keeping the sequence newest first.
pub fn push_front<T>(seq: &mut Vec<T>, item: T) {
    seq.insert(0, item);
}

/// Remove the first element matching `pred` and return it.
///
/// Returns `None` and leaves the sequence untouched when nothing matches.
/// Survivors keep their relative order.
pub fn remove_first_where<T, F>(seq: &mut Vec<T>, pred: F) -> Option<T>
where
    F: FnMut(&T) -> bool,
{
    let index = seq.iter().position(pred)?;
    Some(seq.remove(index))
}
