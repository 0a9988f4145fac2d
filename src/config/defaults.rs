// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for notification settings.
//!
//! This module serves as the single source of truth for default values
//! used by the manager and the configuration layer.

use std::time::Duration;

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default maximum number of notifications visible at once.
pub const DEFAULT_MAX_ITEMS: usize = 5;

/// Minimum allowed value for the visible cap.
pub const MIN_MAX_ITEMS: usize = 1;

// ==========================================================================
// Expiration Defaults
// ==========================================================================

/// Auto-close delay applied when a notification does not specify one.
pub const DEFAULT_EXPIRATION: Duration = Duration::from_secs(5);
