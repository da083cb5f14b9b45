//! Page behaviors for the static portfolio site, compiled to WebAssembly.
//!
//! The crate owns every interactive touch on an otherwise static page:
//! scroll progress, navbar styling, active-link tracking, the hamburger
//! menu, the persisted dark-mode preference, reveal and entrance
//! animations, lazy images, magnetic buttons, parallax shapes, and the
//! custom cursor.
//!
//! Logic is kept out of the browser. [`controller::PageCore`] and the modules it
//! draws on turn inputs (scroll metrics, pointer positions, clicks) into
//! effect descriptions such as [`style::StylePatch`] and
//! [`style::Transform`]. The `page` module, compiled only with the
//! `hydrate` feature, is the sole place that touches `web-sys`: it wires
//! DOM listeners to the core and writes the returned effects back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::PageCore`], the single owner of mutable page state |
//! | [`config`] | Tunables with defaults, optionally overridden from page JSON |
//! | [`consts`] | Shared numeric constants |
//! | [`error`] | Crate error types |
//! | [`storage`] | Preference storage trait, in-memory and `localStorage` backends |
//! | [`theme`] | Light/dark preference state machine |
//! | [`nav`] | Menu flag, active-section resolution, link helpers |
//! | [`scroll`] | Progress bar, navbar style, animation-frame gate |
//! | [`observe`] | Observer options and one-shot watch lists |
//! | [`reveal`] | Reveal-on-scroll and staggered entrance animations |
//! | [`lazy`] | Deferred image source resolution |
//! | [`pointer`] | Magnetic buttons, parallax, custom cursor, field focus |
//! | [`style`] | Inline style patches and CSS transforms |
//! | `page` | Browser bindings (`hydrate` feature only) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod lazy;
pub mod nav;
pub mod observe;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod style;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod page;
