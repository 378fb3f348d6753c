// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! New-layer alignment affordance: reveal, dwell, collapse.
//!
//! A vertical stack has a layer boundary at y=48 whose marker is paired with
//! an alternate trio of alignment markers (start/center/end). Dragging down
//! toward the boundary reveals the trio — and re-measures it, since hidden
//! markers have no geometry yet — dwelling nearby keeps it open, and moving
//! far past the boundary collapses it again.
//!
//! Run:
//! - `cargo run -p dropline_demos --example layer_expansion`

use dropline_highlight::provider::{GeometryProvider, Marker};
use dropline_highlight::types::{Alignment, DragDirection, MarkerFlags, MarkerTags, StackDirection};
use dropline_session::session::{DraggedBlock, Session, SessionConfig};
use kurbo::{Point, Rect, Vec2};

struct CanvasTree {
    container: Rect,
    markers: Vec<Marker<u32>>,
    /// Real geometry for markers that are hidden at collection time.
    measured: Vec<(u32, Rect)>,
    /// Boundary marker → its alternate alignment marker.
    pairs: Vec<(u32, u32)>,
    /// Recorded visibility changes, in call order.
    visibility: Vec<(u32, bool)>,
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
        self.measured
            .iter()
            .find(|(m, _)| *m == id)
            .map(|(_, r)| *r)
            .or_else(|| self.markers.iter().find(|m| m.id == id).map(|m| m.bounds))
    }

    fn paired_alignment_marker(&self, id: u32) -> Option<u32> {
        self.pairs.iter().find(|(a, _)| *a == id).map(|(_, b)| *b)
    }

    fn dragged_children(&self, _canvas_id: &str) -> Vec<u32> {
        Vec::new()
    }

    fn set_visibility(&mut self, id: u32, visible: bool) {
        self.visibility.push((id, visible));
    }

    fn set_transform(&mut self, _id: u32, _offset: Option<Vec2>) {}

    fn set_drop_indicator_visible(&mut self, _canvas_id: &str, _visible: bool) {}
}

fn boundary(id: u32, y: f64, layer: u32) -> Marker<u32> {
    Marker {
        id,
        bounds: Rect::new(0.0, y, 80.0, y + 4.0),
        tags: MarkerTags {
            layer_index: layer,
            ..MarkerTags::default()
        },
    }
}

fn hidden_alignment(id: u32, alignment: Alignment) -> Marker<u32> {
    Marker {
        id,
        bounds: Rect::new(0.0, 48.0, 0.0, 48.0),
        tags: MarkerTags {
            alignment,
            flags: MarkerFlags::NEW_LAYER | MarkerFlags::VERTICAL,
            ..MarkerTags::default()
        },
    }
}

fn main() {
    let tree = CanvasTree {
        container: Rect::new(0.0, 0.0, 80.0, 200.0),
        markers: vec![
            boundary(10, 48.0, 0),
            hidden_alignment(11, Alignment::Start),
            hidden_alignment(12, Alignment::Center),
            hidden_alignment(13, Alignment::End),
            boundary(30, 100.0, 1),
        ],
        measured: vec![
            (11, Rect::new(0.0, 48.0, 4.0, 88.0)),
            (12, Rect::new(30.0, 48.0, 34.0, 88.0)),
            (13, Rect::new(60.0, 48.0, 64.0, 88.0)),
        ],
        pairs: vec![(10, 20)],
        visibility: Vec::new(),
    };

    let mut session = Session::new(
        tree,
        SessionConfig {
            blocks_to_draw: vec![DraggedBlock {
                widget_id: "block-1".into(),
            }],
            canvas_id: "canvas-1".into(),
            direction: StackDirection::Vertical,
            is_current_dragged_canvas: true,
            is_dragging: true,
            use_auto_layout: true,
        },
    );
    session.calculate_highlights();

    // Approach the boundary from above: reveal.
    let near = session
        .highlight_drop_position(Point::new(10.0, 50.0), DragDirection::Bottom)
        .expect("boundary candidates exist");
    println!(
        "y=50:  selected {} show_alignments={}",
        near.selected_highlight.marker, near.show_new_layer_alignments
    );
    assert!(near.show_new_layer_alignments);
    assert_eq!(near.selected_highlight.marker, 10);
    // The trio was re-measured once revealed.
    assert_eq!(session.highlights()[2].height, 40.0);
    assert_eq!(session.highlights()[2].pos_x, 30.0);

    // Dwell close to the boundary: still expanded, no extra toggles.
    let dwell = session
        .highlight_drop_position(Point::new(10.0, 60.0), DragDirection::Bottom)
        .expect("boundary candidates exist");
    println!(
        "y=60:  selected {} show_alignments={}",
        dwell.selected_highlight.marker, dwell.show_new_layer_alignments
    );
    assert!(dwell.show_new_layer_alignments);

    // Move far past the boundary: collapse for the previous layer.
    let away = session
        .highlight_drop_position(Point::new(10.0, 130.0), DragDirection::Bottom)
        .expect("boundary candidates exist");
    println!(
        "y=130: selected {} show_alignments={}",
        away.selected_highlight.marker, away.show_new_layer_alignments
    );
    assert!(!away.show_new_layer_alignments);
    assert_eq!(away.selected_highlight.marker, 30);

    println!("visibility changes: {:?}", session.provider().visibility);
    assert_eq!(
        session.provider().visibility,
        vec![(10, false), (20, true), (10, true), (20, false)]
    );
}
