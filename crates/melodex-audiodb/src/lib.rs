// SPDX-License-Identifier: GPL-3.0-or-later

//! TheAudioDB API client for searching and browsing music metadata.
//!
//! This crate provides a client for the public TheAudioDB JSON API,
//! covering artist/album/track search, id lookups, music videos, and the
//! best-effort trending chart. Responses are normalized defensively: the
//! upstream wraps every result in a top-level property that may be missing
//! or `null`, and this layer always turns that into an empty list or an
//! explicit "not found".

pub mod client;
#[cfg(test)]
mod client_tests;
pub mod error;
pub mod models;

pub use client::AudioDbClient;
pub use error::{AudioDbError, Result};
pub use models::{Album, Artist, MusicVideo, Track, TrendingEntry};
