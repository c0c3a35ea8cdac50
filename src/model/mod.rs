// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Shared model types

pub mod entity_id;

pub use entity_id::{EntityId, EntityKind};
