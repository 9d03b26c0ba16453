//! # page-behaviors
//!
//! Cosmetic page behaviors for a marketing site, compiled to WebAssembly:
//! a footer year stamp, the mobile navigation disclosure, a persisted
//! light/dark theme switch, smooth-scroll buttons, and a scroll-spy that
//! highlights the navigation link of the visible section.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Mounts every behavior against a [`host::Host`] |
//! | [`host`] | The seam between behavior logic and the page |
//! | [`year`] | Footer year stamp |
//! | [`nav`] | Navigation open/close state machine |
//! | [`theme`] | Theme resolution, persistence, and presentation |
//! | [`scroll`] | Smooth-scroll buttons |
//! | [`spy`] | Active-link highlighting from intersection batches |
//! | [`ready`] | Document parse-state check before mounting |
//! | [`subscription`] | Media-query change mechanism selection |
//! | [`config`] | Selectors, classes, and keys, with JSON overrides |
//! | [`consts`] | Default markup contract |
//! | [`error`] | Storage and config errors |
//! | `web` | Browser host and `wasm-bindgen` entry (feature `hydrate`) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod host;
pub mod nav;
pub mod ready;
pub mod scroll;
pub mod spy;
pub mod subscription;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod web;
pub mod year;
