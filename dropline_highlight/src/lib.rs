// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropline Highlight: drop-position candidates and direction-biased ranking.
//!
//! ## Overview
//!
//! While a block is dragged over an auto-layout container, the editor shows a
//! set of candidate insertion points ("highlights") and must pick, on every
//! pointer frame, the one that best matches the pointer position and the
//! direction of travel.
//! This crate owns the geometric half of that problem: it turns raw marker
//! geometry into typed [`HighlightInfo`](crate::types::HighlightInfo)
//! records, filters them down to the candidates viable for the current stack
//! orientation and drag direction, and ranks the survivors by a
//! direction-biased distance metric.
//!
//! It does not render anything and holds no per-gesture state; see the
//! `dropline_session` crate for the stateful session driving these
//! computations frame by frame.
//!
//! ## Inputs
//!
//! Geometry arrives through the
//! [`GeometryProvider`](crate::provider::GeometryProvider) trait: the
//! container's bounding box plus one [`Marker`](crate::provider::Marker) per
//! drop position, each carrying a small typed
//! [`MarkerTags`](crate::types::MarkerTags) schema (alignment, layer index,
//! child index, presence flags). No string parsing, no visual-tree walking.
//!
//! ## Ranking
//!
//! Ranking is a pure, deterministic two-phase pass
//! ([`rank_candidates`](crate::rank::rank_candidates)):
//!
//! 1) a viability filter keyed on the container's
//!    [`StackDirection`](crate::types::StackDirection) and the drag
//!    direction, with fallback-to-last branches so an active drag never ends
//!    up with an empty selection;
//! 2) a stable ascending sort by
//!    [`distance`](crate::rank::distance) — not a physical distance: offsets
//!    along the drag axis are zeroed for same-axis candidates, and
//!    candidates more than 20 px behind the direction of travel are pushed
//!    away by a large penalty so the selection does not snap backward.
//!
//! ## Failure modes
//!
//! Everything degrades gracefully: a container that cannot be located yields
//! an empty candidate set, a stale marker keeps its last known geometry, and
//! an empty viable set yields `None` instead of a bogus selection.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod collect;
pub mod provider;
pub mod rank;
pub mod types;
