// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropline Session: per-canvas state for a drag gesture.
//!
//! ## Overview
//!
//! A [`Session`](crate::session::Session) owns everything one canvas needs
//! across a drag gesture: the current candidate set, the last selected
//! highlight, and the [`LayerExpansion`](crate::expand::LayerExpansion)
//! state machine for the "new layer" alignment affordance.
//! The surrounding drag controller drives it with four operations:
//!
//! 1) [`calculate_highlights`](crate::session::Session::calculate_highlights)
//!    when a gesture starts or geometry is invalidated;
//! 2) [`highlight_drop_position`](crate::session::Session::highlight_drop_position)
//!    on every pointer frame, returning the ranked
//!    [`HighlightSelectionPayload`](dropline_highlight::types::HighlightSelectionPayload)
//!    for the frame;
//! 3) [`get_drop_info`](crate::session::Session::get_drop_info) on the final
//!    drop event, where no live pointer-move is available;
//! 4) [`clean_up_temp_styles`](crate::session::Session::clean_up_temp_styles)
//!    when the gesture ends.
//!
//! Sessions are single-threaded and synchronous: every operation runs to
//! completion within one call, and calls are naturally serialized by the
//! host's event stream. Distinct canvases get distinct sessions and are
//! fully independent.
//!
//! ## Failure modes
//!
//! All of them degrade to `None`/empty: a missing container, no dragged
//! blocks, or a frame arriving before any candidate set exists. Calling
//! cleanup at any point safely aborts an in-progress gesture.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod expand;
pub mod session;
