// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: directions, marker tags, candidates, container geometry, and
//! the per-frame selection payload.

use alloc::vec::Vec;

use kurbo::Rect;

/// Where within a layer an inserted item would sit.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Alignment {
    /// Leading edge of the layer.
    #[default]
    Start,
    /// Centered within the layer.
    Center,
    /// Trailing edge of the layer.
    End,
}

/// Cardinal direction of current pointer travel.
///
/// Used to bias candidate selection toward drop positions ahead of the
/// pointer in the direction of motion.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DragDirection {
    /// Pointer travelling toward the top edge.
    Top,
    /// Pointer travelling toward the bottom edge.
    Bottom,
    /// Pointer travelling toward the left edge.
    Left,
    /// Pointer travelling toward the right edge.
    Right,
}

impl DragDirection {
    /// Whether this is a vertical (top/bottom) drag.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Stack orientation of an auto-layout container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StackDirection {
    /// Children stack top-to-bottom in layers.
    Vertical,
    /// Children flow left-to-right.
    Horizontal,
}

bitflags::bitflags! {
    /// Presence-based marker flags. An absent flag means `false`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MarkerFlags: u8 {
        /// Accepting a drop on this marker starts a new layer rather than
        /// inserting into an existing one.
        const NEW_LAYER = 0b0000_0001;
        /// The marker is a vertical-stack insertion point.
        const VERTICAL  = 0b0000_0010;
    }
}

/// Typed metadata attached to each drop-position marker by the visual tree.
///
/// Unset numeric fields default to 0, flags to absent, and alignment to
/// [`Alignment::Start`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkerTags {
    /// Alignment of the insertion point within its layer.
    pub alignment: Alignment,
    /// Index of the layer within the container.
    pub layer_index: u32,
    /// Index among siblings within the layer.
    pub child_index: u32,
    /// Index within a horizontal sub-row of the layer, if any.
    pub row_index: Option<u32>,
    /// Presence flags.
    pub flags: MarkerFlags,
}

/// A candidate insertion point for a dragged item within a container.
///
/// Geometry is in pixels, relative to the container's top-left corner.
/// `is_vertical` partitions the candidate set into vertical-stack and
/// horizontal-stack insertion points; `width` and `height` are non-negative.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightInfo<M> {
    /// True if accepting a drop here creates a new layer.
    pub is_new_layer: bool,
    /// Position among siblings within its layer.
    pub index: u32,
    /// Position of the layer within the container.
    pub layer_index: u32,
    /// Position within a horizontal sub-row of the layer, if any.
    pub row_index: Option<u32>,
    /// Where within the layer the item would align.
    pub alignment: Alignment,
    /// Left edge, relative to the container origin.
    pub pos_x: f64,
    /// Top edge, relative to the container origin.
    pub pos_y: f64,
    /// Width of the highlight.
    pub width: f64,
    /// Height of the highlight.
    pub height: f64,
    /// True for a vertical-stack insertion point, false for a horizontal one.
    pub is_vertical: bool,
    /// Back-reference to the originating visual marker. Identity only; the
    /// marker is owned by the visual tree.
    pub marker: M,
}

/// Container dimensions, derived once per computation pass from the
/// container's absolute bounding box.
///
/// `top`/`left` are the container's absolute origin. `right` and `bottom`
/// are *extents measured from that origin* (`right == width`,
/// `bottom == height`), not absolute edges. Downstream arithmetic depends on
/// this convention; do not "fix" it to absolute edges.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContainerGeometry {
    /// Absolute y of the container's top edge.
    pub top: f64,
    /// Absolute x of the container's left edge.
    pub left: f64,
    /// Horizontal extent from the container origin.
    pub right: f64,
    /// Vertical extent from the container origin.
    pub bottom: f64,
    /// Width of the container.
    pub width: f64,
    /// Height of the container.
    pub height: f64,
}

impl ContainerGeometry {
    /// Derive container dimensions from an absolute bounding box.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            top: rect.y0,
            bottom: rect.y1 - rect.y0,
            left: rect.x0,
            right: rect.x1 - rect.x0,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// The outcome of ranking the candidate set for one pointer frame.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightSelectionPayload<M> {
    /// The ranked remainder: every viable candidate except the selected one,
    /// in ascending distance order.
    pub highlights: Vec<HighlightInfo<M>>,
    /// The best-matching candidate for this frame.
    pub selected_highlight: HighlightInfo<M>,
    /// Whether the "new layer" alignment affordance should be shown.
    pub show_new_layer_alignments: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_geometry_right_bottom_are_extents() {
        let g = ContainerGeometry::from_rect(Rect::new(100.0, 50.0, 400.0, 250.0));
        assert_eq!(g.left, 100.0);
        assert_eq!(g.top, 50.0);
        // Extents from the origin, not absolute edges.
        assert_eq!(g.right, 300.0);
        assert_eq!(g.bottom, 200.0);
        assert_eq!(g.width, 300.0);
        assert_eq!(g.height, 200.0);
    }

    #[test]
    fn drag_direction_axis() {
        assert!(DragDirection::Top.is_vertical());
        assert!(DragDirection::Bottom.is_vertical());
        assert!(!DragDirection::Left.is_vertical());
        assert!(!DragDirection::Right.is_vertical());
    }

    #[test]
    fn marker_tags_defaults() {
        let tags = MarkerTags::default();
        assert_eq!(tags.alignment, Alignment::Start);
        assert_eq!(tags.layer_index, 0);
        assert_eq!(tags.child_index, 0);
        assert_eq!(tags.row_index, None);
        assert!(tags.flags.is_empty());
    }
}
