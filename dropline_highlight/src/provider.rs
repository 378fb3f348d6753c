// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The geometry-provider seam: the only window the ranking core has onto the
//! host's visual tree.
//!
//! ## Notes
//!
//! Implementations supply measured geometry and typed tags, and accept the
//! few explicit visual side effects the session performs (visibility
//! toggles, temporary drag-feedback transforms). Calls are expected to be
//! cheap and synchronous; there is no async interaction anywhere in this
//! core.

use alloc::vec::Vec;

use kurbo::{Rect, Vec2};

use crate::types::MarkerTags;

/// One raw drop-position marker as reported by the visual tree.
///
/// Bounds are absolute;
/// [`collect_candidates`](crate::collect::collect_candidates) translates
/// them into container-relative coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker<M> {
    /// Opaque marker identity.
    pub id: M,
    /// Absolute bounding box of the marker.
    pub bounds: Rect,
    /// Decoded metadata tags.
    pub tags: MarkerTags,
}

/// Read and mutate access to the visual tree hosting a canvas.
pub trait GeometryProvider {
    /// Opaque, copyable identity of a visual marker.
    type MarkerId: Copy + Eq + core::fmt::Debug;

    /// Absolute bounding box of the container identified by `canvas_id`, or
    /// `None` if it cannot be located.
    fn container_bounds(&self, canvas_id: &str) -> Option<Rect>;

    /// All drop-position markers currently tagged for `canvas_id`.
    fn drop_markers(&self, canvas_id: &str) -> Vec<Marker<Self::MarkerId>>;

    /// Re-read the absolute bounds of a single marker, or `None` if the
    /// marker is no longer live.
    fn marker_bounds(&self, id: Self::MarkerId) -> Option<Rect>;

    /// The alternate "new layer" alignment marker paired with `id`, if any.
    fn paired_alignment_marker(&self, id: Self::MarkerId) -> Option<Self::MarkerId>;

    /// Children of the canvas that may carry temporary drag styles.
    fn dragged_children(&self, canvas_id: &str) -> Vec<Self::MarkerId>;

    /// Show or hide a marker.
    fn set_visibility(&mut self, id: Self::MarkerId, visible: bool);

    /// Apply (`Some`) or clear (`None`) a temporary drag-feedback offset.
    fn set_transform(&mut self, id: Self::MarkerId, offset: Option<Vec2>);

    /// Show or hide the drop-indicator element for a canvas.
    fn set_drop_indicator_visible(&mut self, canvas_id: &str, visible: bool);
}
