//! Client-side behavior layer for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the page once its
//! markup is in place. It persists the light/dark theme preference, smooths
//! in-page navigation and highlights the section being read, reveals content
//! as it scrolls into view, drives the navbar and back-to-top button from the
//! scroll position, makes project cards clickable as a whole and adds a
//! copy-to-clipboard button next to the email link.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme resolution, toggle copy and the persisted preference |
//! | [`nav`] | Fragment scroll math and active-link tracking |
//! | [`reveal`] | One-shot reveal-on-scroll bookkeeping |
//! | [`scroll`] | Navbar / back-to-top state derived from the scroll offset |
//! | [`cards`] | Whole-card click and keyboard activation |
//! | [`copy_email`] | Copy-email button states and revert deadline |
//! | [`observer`] | Intersection observer seam shared by `nav` and `reveal` |
//! | [`config`] | Selectors, thresholds and timings, loadable from JSON |
//! | [`error`] | Error types |
//! | [`consts`] | Default pixel thresholds, labels, classes and selectors |
//! | [`dom`] | Browser bindings, the page controller and the JS entry points |

pub mod cards;
pub mod config;
pub mod consts;
pub mod copy_email;
pub mod dom;
pub mod error;
pub mod nav;
pub mod observer;
pub mod reveal;
pub mod scroll;
pub mod theme;
