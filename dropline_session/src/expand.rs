// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer-expansion state machine: reveal/collapse transitions for the
//! "new layer" alignment affordance.
//!
//! ## Usage
//!
//! 1) Build the frame's payload and read its `show_new_layer_alignments`.
//! 2) Call [`LayerExpansion::update`] with that flag, the selected
//!    candidate's layer, and the previously active layer.
//! 3) Apply the returned [`ExpansionEvent`], if any: `Reveal` swaps the
//!    boundary marker for its paired alignment markers, `Collapse` swaps
//!    them back for the *previously* active layer.
//!
//! The machine itself is pure; all visual side effects stay with the caller.

/// A layer-expansion transition to apply.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ExpansionEvent {
    /// Reveal the alternate alignment markers for the selected layer.
    Reveal,
    /// Hide the alternate markers for the previously active layer.
    Collapse,
}

/// Tracks whether the new-layer alignment affordance is expanded.
///
/// One instance per session, not per layer: only one layer can be active at
/// a time, so revealing for a new layer implicitly supersedes any other.
/// Moving to a different layer while expanded therefore emits a fresh
/// [`ExpansionEvent::Reveal`] for the new layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerExpansion {
    expanded: bool,
}

impl LayerExpansion {
    /// Create a collapsed controller.
    pub const fn new() -> Self {
        Self { expanded: false }
    }

    /// Whether the affordance is currently expanded.
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Collapse without emitting an event (gesture cleanup).
    pub fn reset(&mut self) {
        self.expanded = false;
    }

    /// Feed one frame's outcome into the machine and return the transition
    /// to apply, if any.
    ///
    /// `show` is the frame's `show_new_layer_alignments` flag,
    /// `selected_layer` the selected candidate's layer index, and
    /// `last_layer` the previously active highlight's layer index (absent on
    /// the first frame of a gesture).
    pub fn update(
        &mut self,
        show: bool,
        selected_layer: u32,
        last_layer: Option<u32>,
    ) -> Option<ExpansionEvent> {
        if show && (last_layer != Some(selected_layer) || !self.expanded) {
            self.expanded = true;
            Some(ExpansionEvent::Reveal)
        } else if !show && self.expanded {
            self.expanded = false;
            Some(ExpansionEvent::Collapse)
        } else {
            None
        }
    }
}
