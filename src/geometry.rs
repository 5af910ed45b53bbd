//! Geometry service: pure vertical-offset math
//!
//! Computes where each sidenote sits relative to its container so that
//! it aligns with its anchor without colliding with the previous note.
//! No DOM access; callers feed in measured rectangles and apply the
//! resulting offsets themselves.

/// Measured extents for one sidenote, in viewport pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteExtent {
    /// Top of the anchor (reference marker) rectangle
    pub anchor_top: f64,
    /// Top of the container the sidenote was inserted into
    pub container_top: f64,
    /// Rendered height of the sidenote element
    pub height: f64,
}

/// Compute the `top` offset for a single sidenote.
///
/// The base offset aligns the note's top with its anchor's top, relative
/// to the container it lives in. If the previous note (in document
/// order) would overlap, the offset grows by exactly the deficit so the
/// two sit flush with `margin` pixels between them.
pub fn compute_offset(
    anchor_top: f64,
    container_top: f64,
    previous_note_bottom: Option<f64>,
    margin: f64,
) -> f64 {
    let mut offset = anchor_top - container_top;

    if let Some(prev_bottom) = previous_note_bottom {
        let candidate_top = container_top + offset;
        let min_top = prev_bottom + margin;
        if candidate_top < min_top {
            offset += min_top - candidate_top;
        }
    }

    offset
}

/// Resolve offsets for a whole column of sidenotes.
///
/// A single greedy pass in document order: each note's resolved bottom
/// becomes the bound for the next. Later notes never push earlier ones
/// down; there is no backtracking.
pub fn place_sequence(notes: &[NoteExtent], margin: f64) -> Vec<f64> {
    let mut offsets = Vec::with_capacity(notes.len());
    let mut prev_bottom: Option<f64> = None;

    for note in notes {
        let offset = compute_offset(note.anchor_top, note.container_top, prev_bottom, margin);
        prev_bottom = Some(note.container_top + offset + note.height);
        offsets.push(offset);
    }

    offsets
}
