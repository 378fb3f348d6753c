// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction-biased drop ranking across a horizontal stack.
//!
//! Two drop positions sit at x=100 and x=300. As the pointer travels right,
//! the selection stays with the nearer candidate until the pointer has moved
//! meaningfully past it, at which point the backward-snap penalty hands the
//! selection to the next candidate ahead.
//!
//! Run:
//! - `cargo run -p dropline_demos --example drop_ranking`

use dropline_highlight::provider::{GeometryProvider, Marker};
use dropline_highlight::types::{DragDirection, MarkerTags, StackDirection};
use dropline_session::session::{DraggedBlock, Session, SessionConfig};
use kurbo::{Point, Rect, Vec2};

struct CanvasTree {
    container: Rect,
    markers: Vec<Marker<u32>>,
}

impl GeometryProvider for CanvasTree {
    type MarkerId = u32;

    fn container_bounds(&self, _canvas_id: &str) -> Option<Rect> {
        Some(self.container)
    }

    fn drop_markers(&self, _canvas_id: &str) -> Vec<Marker<u32>> {
        self.markers.clone()
    }

    fn marker_bounds(&self, id: u32) -> Option<Rect> {
        self.markers.iter().find(|m| m.id == id).map(|m| m.bounds)
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

fn main() {
    let tree = CanvasTree {
        container: Rect::new(0.0, 0.0, 400.0, 40.0),
        markers: vec![
            Marker {
                id: 1,
                bounds: Rect::new(100.0, 0.0, 104.0, 40.0),
                tags: MarkerTags::default(),
            },
            Marker {
                id: 2,
                bounds: Rect::new(300.0, 0.0, 304.0, 40.0),
                tags: MarkerTags::default(),
            },
        ],
    };

    let mut session = Session::new(
        tree,
        SessionConfig {
            blocks_to_draw: vec![DraggedBlock {
                widget_id: "block-1".into(),
            }],
            canvas_id: "canvas-1".into(),
            direction: StackDirection::Horizontal,
            is_current_dragged_canvas: true,
            is_dragging: true,
            use_auto_layout: true,
        },
    );
    session.calculate_highlights();

    let frames = [90.0, 150.0, 330.0];
    let mut selections = Vec::new();
    for x in frames {
        let payload = session
            .highlight_drop_position(Point::new(x, 20.0), DragDirection::Right)
            .expect("candidates exist for every frame");
        println!(
            "pointer x={x:>5}: selected marker {} (remaining: {:?})",
            payload.selected_highlight.marker,
            payload
                .highlights
                .iter()
                .map(|h| h.marker)
                .collect::<Vec<_>>()
        );
        selections.push(payload.selected_highlight.marker);
    }

    // The x=100 candidate wins while the pointer is ahead of it; once the
    // pointer is more than 20 px past it, x=300 takes over.
    assert_eq!(selections, vec![1, 2, 2]);

    let drop = session
        .get_drop_info(Point::new(330.0, 20.0))
        .expect("a selection was cached during the gesture");
    println!("drop lands on marker {}", drop.marker);
    assert_eq!(drop.marker, 2);
}
