// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate collection: convert raw marker geometry and tags into
//! container-relative [`HighlightInfo`] records.

use alloc::vec::Vec;

use crate::provider::{GeometryProvider, Marker};
use crate::types::{ContainerGeometry, HighlightInfo, MarkerFlags};

/// Collect the candidate set for a canvas.
///
/// Queries the provider for the container and its markers, derives the
/// [`ContainerGeometry`] once, and decodes every marker into a
/// [`HighlightInfo`] positioned relative to the container origin.
///
/// Returns `None` (no geometry, no candidates) when the container cannot be
/// located.
pub fn collect_candidates<P: GeometryProvider>(
    provider: &P,
    canvas_id: &str,
) -> Option<(ContainerGeometry, Vec<HighlightInfo<P::MarkerId>>)> {
    let bounds = provider.container_bounds(canvas_id)?;
    let geometry = ContainerGeometry::from_rect(bounds);
    let highlights = provider
        .drop_markers(canvas_id)
        .into_iter()
        .map(|marker| decode_marker(marker, &geometry))
        .collect();
    Some((geometry, highlights))
}

fn decode_marker<M>(marker: Marker<M>, geometry: &ContainerGeometry) -> HighlightInfo<M> {
    let Marker { id, bounds, tags } = marker;
    HighlightInfo {
        is_new_layer: tags.flags.contains(MarkerFlags::NEW_LAYER),
        index: tags.child_index,
        layer_index: tags.layer_index,
        row_index: tags.row_index,
        alignment: tags.alignment,
        pos_x: bounds.x0 - geometry.left,
        pos_y: bounds.y0 - geometry.top,
        width: bounds.width(),
        height: bounds.height(),
        is_vertical: tags.flags.contains(MarkerFlags::VERTICAL),
        marker: id,
    }
}

/// Re-read position and size for one candidate, leaving decoded metadata
/// untouched.
///
/// Used after a layer expansion reveals markers whose real geometry was not
/// yet measured. If the originating marker can no longer be located the
/// candidate is returned unchanged: stale-but-present is preferred over
/// shrinking the set and corrupting index-based lookups.
pub fn refresh_geometry<P: GeometryProvider>(
    provider: &P,
    geometry: &ContainerGeometry,
    mut highlight: HighlightInfo<P::MarkerId>,
) -> HighlightInfo<P::MarkerId> {
    if let Some(bounds) = provider.marker_bounds(highlight.marker) {
        highlight.pos_x = bounds.x0 - geometry.left;
        highlight.pos_y = bounds.y0 - geometry.top;
        highlight.width = bounds.width();
        highlight.height = bounds.height();
    }
    highlight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Alignment, MarkerTags};
    use alloc::vec;
    use kurbo::{Rect, Vec2};

    struct FakeTree {
        container: Option<Rect>,
        markers: Vec<Marker<u32>>,
    }

    impl GeometryProvider for FakeTree {
        type MarkerId = u32;

        fn container_bounds(&self, _canvas_id: &str) -> Option<Rect> {
            self.container
        }

        fn drop_markers(&self, _canvas_id: &str) -> Vec<Marker<u32>> {
            self.markers.clone()
        }

        fn marker_bounds(&self, id: u32) -> Option<Rect> {
            self.markers
                .iter()
                .find(|m| m.id == id)
                .map(|m| m.bounds)
        }

        fn paired_alignment_marker(&self, _id: u32) -> Option<u32> {
            None
        }

        fn dragged_children(&self, _canvas_id: &str) -> Vec<u32> {
            Vec::new()
        }

        fn set_visibility(&mut self, _id: u32, _visible: bool) {}

        fn set_transform(&mut self, _id: u32, _offset: Option<Vec2>) {}

        fn set_drop_indicator_visible(&mut self, _canvas_id: &str, _visible: bool) {}
    }

    fn marker(id: u32, bounds: Rect, tags: MarkerTags) -> Marker<u32> {
        Marker { id, bounds, tags }
    }

    #[test]
    fn collects_container_relative_candidates() {
        let tree = FakeTree {
            container: Some(Rect::new(100.0, 50.0, 500.0, 450.0)),
            markers: vec![
                marker(
                    1,
                    Rect::new(110.0, 60.0, 190.0, 64.0),
                    MarkerTags {
                        alignment: Alignment::Center,
                        layer_index: 2,
                        child_index: 3,
                        row_index: Some(1),
                        flags: MarkerFlags::NEW_LAYER,
                    },
                ),
                marker(
                    2,
                    Rect::new(100.0, 50.0, 104.0, 150.0),
                    MarkerTags {
                        flags: MarkerFlags::VERTICAL,
                        ..MarkerTags::default()
                    },
                ),
            ],
        };

        let (geometry, highlights) = collect_candidates(&tree, "canvas-1").unwrap();
        assert_eq!(geometry.left, 100.0);
        assert_eq!(geometry.top, 50.0);
        assert_eq!(highlights.len(), 2);

        let first = &highlights[0];
        assert_eq!(first.pos_x, 10.0);
        assert_eq!(first.pos_y, 10.0);
        assert_eq!(first.width, 80.0);
        assert_eq!(first.height, 4.0);
        assert_eq!(first.alignment, Alignment::Center);
        assert_eq!(first.layer_index, 2);
        assert_eq!(first.index, 3);
        assert_eq!(first.row_index, Some(1));
        assert!(first.is_new_layer);
        assert!(!first.is_vertical);
        assert_eq!(first.marker, 1);

        let second = &highlights[1];
        assert_eq!(second.pos_x, 0.0);
        assert_eq!(second.pos_y, 0.0);
        assert!(second.is_vertical);
        assert!(!second.is_new_layer);
        assert_eq!(second.layer_index, 0);
        assert_eq!(second.index, 0);
    }

    #[test]
    fn missing_container_yields_nothing() {
        let tree = FakeTree {
            container: None,
            markers: vec![marker(
                1,
                Rect::new(0.0, 0.0, 10.0, 10.0),
                MarkerTags::default(),
            )],
        };
        assert!(collect_candidates(&tree, "canvas-1").is_none());
    }

    #[test]
    fn refresh_rereads_geometry_only() {
        let tree = FakeTree {
            container: Some(Rect::new(100.0, 50.0, 500.0, 450.0)),
            markers: vec![marker(
                7,
                Rect::new(140.0, 90.0, 200.0, 130.0),
                MarkerTags::default(),
            )],
        };
        let geometry = ContainerGeometry::from_rect(tree.container.unwrap());

        // Candidate collected before the marker was measured.
        let stale = HighlightInfo {
            is_new_layer: true,
            index: 4,
            layer_index: 1,
            row_index: None,
            alignment: Alignment::End,
            pos_x: 0.0,
            pos_y: 0.0,
            width: 0.0,
            height: 0.0,
            is_vertical: false,
            marker: 7u32,
        };

        let fresh = refresh_geometry(&tree, &geometry, stale);
        assert_eq!(fresh.pos_x, 40.0);
        assert_eq!(fresh.pos_y, 40.0);
        assert_eq!(fresh.width, 60.0);
        assert_eq!(fresh.height, 40.0);
        // Metadata untouched.
        assert!(fresh.is_new_layer);
        assert_eq!(fresh.index, 4);
        assert_eq!(fresh.layer_index, 1);
        assert_eq!(fresh.alignment, Alignment::End);
    }

    #[test]
    fn refresh_keeps_candidate_when_marker_is_gone() {
        let tree = FakeTree {
            container: Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
            markers: Vec::new(),
        };
        let geometry = ContainerGeometry::from_rect(tree.container.unwrap());
        let stale = HighlightInfo {
            is_new_layer: false,
            index: 0,
            layer_index: 0,
            row_index: None,
            alignment: Alignment::Start,
            pos_x: 12.0,
            pos_y: 34.0,
            width: 56.0,
            height: 7.0,
            is_vertical: false,
            marker: 99u32,
        };
        let unchanged = refresh_geometry(&tree, &geometry, stale.clone());
        assert_eq!(unchanged, stale);
    }
}
