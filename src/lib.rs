//! Srilankan.vacations library.
//!
//! A server-rendered travel site that pulls stories from the Lankan.org
//! WordPress feed, pages through them defensively, and serves them alongside
//! an attractions map and a few static pages.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod attractions;
pub mod components;
pub mod config;
pub mod constants;
pub mod feed;
pub mod web;
