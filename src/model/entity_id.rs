// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for points and curves on the artboard.
//!
//! Every `EntityId` comes from a single global atomic counter, so ids are
//! unique across kinds and never reused within a session. The kind is carried
//! alongside the number only for display (`point__12`, `curve__13`); equality
//! and ordering look at the whole id.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// What an [`EntityId`] was minted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Point,
    Curve,
    Shape,
}

impl EntityKind {
    fn prefix(self) -> &'static str {
        match self {
            EntityKind::Point => "point",
            EntityKind::Curve => "curve",
            EntityKind::Shape => "shape",
        }
    }
}

/// A unique identifier for a point, curve or selectable shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId {
    kind: EntityKind,
    raw: u64,
}

static ENTITY_COUNTER: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    /// Mint a fresh id of the given kind
    pub fn next(kind: EntityKind) -> Self {
        Self {
            kind,
            raw: ENTITY_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn point() -> Self {
        Self::next(EntityKind::Point)
    }

    pub fn curve() -> Self {
        Self::next(EntityKind::Curve)
    }

    pub fn shape() -> Self {
        Self::next(EntityKind::Shape)
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}__{}", self.kind.prefix(), self.raw)
    }
}
