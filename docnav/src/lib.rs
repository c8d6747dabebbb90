//! Document navigation core for the portfolio documentation page.
//!
//! This crate owns the selection logic behind the docs sidebar: a fixed
//! [`registry::DocumentRegistry`] of key-to-fragment mappings, and a
//! [`router::DocumentRouter`] that keeps exactly one link active and renders
//! the matching fragment into a content area. It has no browser dependency;
//! the host (`folio`, under its `hydrate` feature) adapts DOM elements to the
//! [`router::LinkElement`] and [`router::ContentArea`] traits.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`registry`] | Immutable key-to-fragment mapping and the not-found fallback |
//! | [`router`] | Collaborator traits and the single-selection router |

pub mod registry;
pub mod router;
