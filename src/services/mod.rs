// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod migration;
pub mod pace;

pub use migration::{MigrationError, MigrationReport};
pub use pace::compute_pace;
