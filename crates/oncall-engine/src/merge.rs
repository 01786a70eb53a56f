//! Coalesce adjacent segments that share an owner.

use crate::model::Segment;

/// Merge consecutive contiguous segments with the same user.
///
/// Segments with `start >= end` are dropped. The result has no two adjacent
/// segments that share a user and touch, and merging it again returns it
/// unchanged.
pub fn merge_segments<I>(segments: I) -> Vec<Segment>
where
    I: IntoIterator<Item = Segment>,
{
    let mut merged: Vec<Segment> = Vec::new();

    for segment in segments {
        if segment.start >= segment.end {
            continue;
        }
        if let Some(last) = merged.last_mut() {
            if last.user == segment.user && last.end == segment.start {
                last.end = segment.end;
                continue;
            }
        }
        merged.push(segment);
    }

    merged
}
