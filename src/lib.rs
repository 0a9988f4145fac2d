// SPDX-License-Identifier: MPL-2.0
//! `corner_toasts` shows transient notification cards in a corner of a host
//! window's overlay layer.
//!
//! It caps how many cards are open at once by closing the oldest one, and
//! closes each card after its expiration on the host's single UI loop.
//! Rendering is left to the host toolkit; the crate exposes the card stack,
//! anchor tags and alignment hints a renderer needs.

pub mod config;
pub mod error;
pub mod host;
pub mod notifications;
pub mod scheduler;
