// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-canvas drag session: owns the candidate set, the last selection, and
//! the layer-expansion state across one drag gesture.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use dropline_highlight::collect::{collect_candidates, refresh_geometry};
use dropline_highlight::provider::GeometryProvider;
use dropline_highlight::rank::build_payload;
use dropline_highlight::types::{
    ContainerGeometry, DragDirection, HighlightInfo, HighlightSelectionPayload, StackDirection,
};

use crate::expand::{ExpansionEvent, LayerExpansion};

/// A block participating in the current drag.
///
/// Only the identifier is consumed here; dragged-block geometry is the
/// host's concern.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DraggedBlock {
    /// Host-side widget identifier.
    pub widget_id: String,
}

/// Configuration of a session, fixed for one canvas.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Blocks being dragged.
    pub blocks_to_draw: Vec<DraggedBlock>,
    /// Identifier of the canvas this session serves.
    pub canvas_id: String,
    /// Stack orientation of the container.
    pub direction: StackDirection,
    /// Whether the pointer is currently over this canvas.
    pub is_current_dragged_canvas: bool,
    /// Whether a drag gesture is active.
    pub is_dragging: bool,
    /// Whether the canvas auto-arranges its children. Highlights only exist
    /// in auto-layout mode.
    pub use_auto_layout: bool,
}

/// Per-canvas drop-position session.
///
/// One instance per canvas, driven by that canvas's pointer-event stream.
/// State never outlives a gesture: it is populated lazily on the first query
/// during a drag, mutated on every subsequent frame, and reset by
/// [`clean_up_temp_styles`](Self::clean_up_temp_styles).
pub struct Session<P: GeometryProvider> {
    provider: P,
    config: SessionConfig,
    highlights: Vec<HighlightInfo<P::MarkerId>>,
    last_active: Option<HighlightInfo<P::MarkerId>>,
    expansion: LayerExpansion,
    container: Option<ContainerGeometry>,
}

impl<P: GeometryProvider> core::fmt::Debug for Session<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("canvas_id", &self.config.canvas_id)
            .field("highlights", &self.highlights.len())
            .field("expanded", &self.expansion.is_expanded())
            .finish_non_exhaustive()
    }
}

impl<P: GeometryProvider> Session<P> {
    /// Create a session over `provider` for one canvas.
    pub fn new(provider: P, config: SessionConfig) -> Self {
        Self {
            provider,
            config,
            highlights: Vec::new(),
            last_active: None,
            expansion: LayerExpansion::new(),
            container: None,
        }
    }

    /// The current candidate set. Empty when no drag is active.
    pub fn highlights(&self) -> &[HighlightInfo<P::MarkerId>] {
        &self.highlights
    }

    /// The last selected highlight, if any.
    pub fn last_active(&self) -> Option<&HighlightInfo<P::MarkerId>> {
        self.last_active.as_ref()
    }

    /// Shared access to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Recompute the candidate set for this canvas.
    ///
    /// Always resets transient styles and session state first. Candidates
    /// are only rebuilt while an auto-layout drag is active over this canvas
    /// with at least one dragged block; otherwise the set stays empty.
    pub fn calculate_highlights(&mut self) -> &[HighlightInfo<P::MarkerId>] {
        self.clean_up_temp_styles();
        if self.config.use_auto_layout
            && self.config.is_dragging
            && self.config.is_current_dragged_canvas
            && !self.config.blocks_to_draw.is_empty()
            && let Some((geometry, highlights)) =
                collect_candidates(&self.provider, &self.config.canvas_id)
        {
            self.container = Some(geometry);
            self.highlights = highlights;
        }
        &self.highlights
    }

    /// Reset transient drag styles and session state.
    ///
    /// Idempotent and safe to call with no active drag: restores every
    /// dragged child's visibility and transform, hides the drop indicator,
    /// and clears the candidate set, the last selection, and the expansion
    /// flag.
    pub fn clean_up_temp_styles(&mut self) {
        for child in self.provider.dragged_children(&self.config.canvas_id) {
            self.provider.set_visibility(child, true);
            self.provider.set_transform(child, None);
        }
        self.provider
            .set_drop_indicator_visible(&self.config.canvas_id, false);
        self.highlights.clear();
        self.last_active = None;
        self.expansion.reset();
    }

    /// Select the best drop position for one pointer frame.
    ///
    /// Lazily collects the candidate set if it has not been built yet,
    /// ranks it for `pointer` and `direction`, drives the layer-expansion
    /// affordance, and records the selection as the active highlight.
    ///
    /// Returns `None` when no candidate exists; the caller must not render
    /// feedback in that case.
    pub fn highlight_drop_position(
        &mut self,
        pointer: Point,
        direction: DragDirection,
    ) -> Option<HighlightSelectionPayload<P::MarkerId>> {
        let payload = self.payload_at(pointer, Some(direction))?;

        let event = self.expansion.update(
            payload.show_new_layer_alignments,
            payload.selected_highlight.layer_index,
            self.last_active.as_ref().map(|h| h.layer_index),
        );
        match event {
            Some(ExpansionEvent::Reveal) => self.reveal_alignments(&payload.selected_highlight),
            Some(ExpansionEvent::Collapse) => {
                if let Some(marker) = self.last_active.as_ref().map(|h| h.marker) {
                    self.toggle_alignments(marker, false);
                }
            }
            None => {}
        }

        self.last_active = Some(payload.selected_highlight.clone());
        Some(payload)
    }

    /// The drop decision for a terminal drop event.
    ///
    /// Returns the highlight already selected during this gesture if one
    /// exists; otherwise computes one from the raw point (no live drag
    /// direction is available) and caches it as the active highlight.
    pub fn get_drop_info(&mut self, point: Point) -> Option<HighlightInfo<P::MarkerId>> {
        if let Some(active) = &self.last_active {
            return Some(active.clone());
        }
        let payload = self.payload_at(point, None)?;
        self.last_active = Some(payload.selected_highlight.clone());
        Some(payload.selected_highlight)
    }

    fn payload_at(
        &mut self,
        pointer: Point,
        drag: Option<DragDirection>,
    ) -> Option<HighlightSelectionPayload<P::MarkerId>> {
        if self.highlights.is_empty() {
            let (geometry, highlights) =
                collect_candidates(&self.provider, &self.config.canvas_id)?;
            self.container = Some(geometry);
            self.highlights = highlights;
        }
        build_payload(
            &self.highlights,
            pointer,
            self.config.direction,
            drag,
            self.expansion.is_expanded(),
        )
    }

    /// Reveal the alternate alignment markers for the selected layer.
    ///
    /// Markers that only just became visible have no measured geometry yet
    /// (zero height); when the candidate following the selection is in that
    /// state, the three candidates after the selection are re-measured in
    /// place. Missing trailing candidates are skipped.
    fn reveal_alignments(&mut self, selected: &HighlightInfo<P::MarkerId>) {
        self.toggle_alignments(selected.marker, true);
        let Some(index) = self
            .highlights
            .iter()
            .position(|h| h.marker == selected.marker)
        else {
            return;
        };
        let needs_refresh = self
            .highlights
            .get(index + 1)
            .is_some_and(|h| h.height == 0.0);
        if needs_refresh
            && let Some(geometry) = self.container
        {
            for i in index + 1..=index + 3 {
                if i >= self.highlights.len() {
                    break;
                }
                let refreshed =
                    refresh_geometry(&self.provider, &geometry, self.highlights[i].clone());
                self.highlights[i] = refreshed;
            }
        }
    }

    /// Swap visibility between a boundary marker and its paired alternate
    /// alignment marker. No-op for markers without a pair.
    fn toggle_alignments(&mut self, marker: P::MarkerId, reveal: bool) {
        if let Some(paired) = self.provider.paired_alignment_marker(marker) {
            self.provider.set_visibility(marker, !reveal);
            self.provider.set_visibility(paired, reveal);
        }
    }
}
