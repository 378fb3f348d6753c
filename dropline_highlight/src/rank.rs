// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate ranking: the viability filter and the direction-biased
//! distance metric.
//!
//! ## Viability
//!
//! Which candidates are even considered depends on the stack orientation of
//! the container being dragged over, not on the moving item:
//!
//! - Vertical-stack containers: vertical drags insert between layers, so
//!   only horizontal highlights qualify; horizontal drags insert within a
//!   layer, so only vertical highlights whose y-span contains the pointer
//!   qualify (falling back to the last horizontal highlight when none do).
//! - Horizontal-stack containers: only highlights whose y-span contains the
//!   pointer qualify, falling back to the last highlight.
//!
//! The fallback branches guarantee a non-empty ranked set whenever at least
//! one candidate of the relevant orientation exists, so an active drag never
//! loses its selection.
//!
//! ## Distance
//!
//! [`distance`] is a tie-break metric, not a physical distance: same-axis
//! offsets are zeroed, and candidates behind the direction of travel past
//! [`BACKWARD_SNAP_PX`] are pushed away by [`BACKWARD_PENALTY`] so the
//! selection does not snap backward once the pointer has moved meaningfully
//! past a candidate.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::{Point, Vec2};

use crate::types::{DragDirection, HighlightInfo, HighlightSelectionPayload, StackDirection};

/// Pointer travel, in px, beyond which a candidate counts as "behind" the
/// direction of motion.
pub const BACKWARD_SNAP_PX: f64 = 20.0;

/// Offset added to a candidate behind the direction of motion, pushing it to
/// the back of the ranking.
pub const BACKWARD_PENALTY: f64 = 2000.0;

/// Maximum x-zeroed distance, in px, between the pointer and the top-ranked
/// candidate at which the new-layer alignment affordance is revealed.
pub const NEW_LAYER_REVEAL_PX: f64 = 15.0;

/// Filter the candidate set down to those viable for the current stack
/// orientation and drag direction.
///
/// With no drag direction (terminal drop queries) the full set is kept.
pub fn viable_candidates<M: Clone>(
    candidates: &[HighlightInfo<M>],
    pointer: Point,
    stack: StackDirection,
    drag: Option<DragDirection>,
) -> Vec<HighlightInfo<M>> {
    let Some(drag) = drag else {
        return candidates.to_vec();
    };
    match stack {
        StackDirection::Vertical => {
            vertical_stack_candidates(candidates, pointer, drag.is_vertical())
        }
        StackDirection::Horizontal => horizontal_stack_candidates(candidates, pointer),
    }
}

fn vertical_stack_candidates<M: Clone>(
    candidates: &[HighlightInfo<M>],
    pointer: Point,
    is_vertical_drag: bool,
) -> Vec<HighlightInfo<M>> {
    let mut viable: Vec<HighlightInfo<M>> = candidates
        .iter()
        .filter(|h| {
            if is_vertical_drag {
                // Vertical drags insert between layers: horizontal highlights only.
                !h.is_vertical
            } else {
                // Horizontal drags insert within a layer: vertical highlights
                // whose y-span contains the pointer.
                h.is_vertical && spans_pointer_y(h, pointer)
            }
        })
        .cloned()
        .collect();
    // No vertical highlight in the pointer's y-span: fall back to the last
    // horizontal highlight.
    if !is_vertical_drag
        && viable.is_empty()
        && let Some(last) = candidates.iter().rfind(|h| !h.is_vertical)
    {
        viable.push(last.clone());
    }
    viable
}

fn horizontal_stack_candidates<M: Clone>(
    candidates: &[HighlightInfo<M>],
    pointer: Point,
) -> Vec<HighlightInfo<M>> {
    let mut viable: Vec<HighlightInfo<M>> = candidates
        .iter()
        .filter(|h| spans_pointer_y(h, pointer))
        .cloned()
        .collect();
    // Nothing in the pointer's y-span: fall back to the last highlight.
    if viable.is_empty()
        && let Some(last) = candidates.last()
    {
        viable.push(last.clone());
    }
    viable
}

fn spans_pointer_y<M>(highlight: &HighlightInfo<M>, pointer: Point) -> bool {
    pointer.y >= highlight.pos_y && pointer.y <= highlight.pos_y + highlight.height
}

/// Direction-biased distance between a candidate and the pointer.
///
/// Offsets along the drag axis are zeroed for same-axis candidates (a
/// vertical highlight never wins on x during a vertical drag, and vice
/// versa), and a candidate more than [`BACKWARD_SNAP_PX`] behind the
/// direction of travel has [`BACKWARD_PENALTY`] folded into its offset.
pub fn distance<M>(
    candidate: &HighlightInfo<M>,
    pointer: Point,
    drag: Option<DragDirection>,
) -> f64 {
    let is_vertical_drag = drag.is_some_and(DragDirection::is_vertical);

    let mut dx = if candidate.is_vertical && is_vertical_drag {
        0.0
    } else {
        candidate.pos_x - pointer.x
    };
    let mut dy = if !candidate.is_vertical && !is_vertical_drag {
        0.0
    } else {
        candidate.pos_y - pointer.y
    };

    match drag {
        Some(DragDirection::Left) if dx > BACKWARD_SNAP_PX => dx += BACKWARD_PENALTY,
        Some(DragDirection::Right) if dx < -BACKWARD_SNAP_PX => dx -= BACKWARD_PENALTY,
        Some(DragDirection::Top) if dy > BACKWARD_SNAP_PX => dy += BACKWARD_PENALTY,
        Some(DragDirection::Bottom) if dy < -BACKWARD_SNAP_PX => dy -= BACKWARD_PENALTY,
        _ => {}
    }

    Vec2::new(dx, dy).hypot()
}

/// Rank the viable candidates ascending by [`distance`].
///
/// Pure and deterministic: the sort is stable, so equal-distance candidates
/// keep their input order. The first element is the selected candidate.
pub fn rank_candidates<M: Clone>(
    candidates: &[HighlightInfo<M>],
    pointer: Point,
    stack: StackDirection,
    drag: Option<DragDirection>,
) -> Vec<HighlightInfo<M>> {
    let mut viable = viable_candidates(candidates, pointer, stack, drag);
    viable.sort_by(|a, b| {
        distance(a, pointer, drag)
            .partial_cmp(&distance(b, pointer, drag))
            .unwrap_or(Ordering::Equal)
    });
    viable
}

/// Rank the candidate set and assemble the selection payload for one frame.
///
/// `expanded` is the session's current layer-expansion state: for vertical
/// drags `show_new_layer_alignments` is true iff the x-zeroed distance
/// between the top candidate and the pointer is under
/// [`NEW_LAYER_REVEAL_PX`]; for any other frame the flag simply mirrors
/// `expanded`, so an expansion persists until the controller collapses it.
///
/// Returns `None` when no viable candidate exists.
pub fn build_payload<M: Clone>(
    candidates: &[HighlightInfo<M>],
    pointer: Point,
    stack: StackDirection,
    drag: Option<DragDirection>,
    expanded: bool,
) -> Option<HighlightSelectionPayload<M>> {
    let mut ranked = rank_candidates(candidates, pointer, stack, drag);
    if ranked.is_empty() {
        return None;
    }
    let selected = ranked.remove(0);

    let is_vertical_drag = drag.is_some_and(DragDirection::is_vertical);
    let show_new_layer_alignments = if is_vertical_drag {
        // Compare on the y axis alone: both the candidate and the pointer
        // have their horizontal offset zeroed.
        let mut top = selected.clone();
        top.pos_x = 0.0;
        distance(&top, Point::new(0.0, pointer.y), drag) < NEW_LAYER_REVEAL_PX
    } else {
        expanded
    };

    Some(HighlightSelectionPayload {
        highlights: ranked,
        selected_highlight: selected,
        show_new_layer_alignments,
    })
}
