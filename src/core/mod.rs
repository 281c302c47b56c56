//! # Core Presentation Logic
//!
//! Everything that decides *what* is on screen. It knows nothing about any
//! specific terminal library.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • pages  (what to show)│
//!                    │  • navigation (cursor)  │
//!                    │  • format + wrap (lines)│
//!                    │                         │
//!                    │  No terminal. Pure.     │
//!                    └───────────┬─────────────┘
//!                                │ RenderBoundary
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`wrap`]: greedy whole-word line wrapping
//! - [`format`]: slide body and title layout
//! - [`pages`]: page list resolution from flags and explicit page refs
//! - [`navigation`]: the `Signal` → `update()` → `Effect` cursor reducer
//! - [`session`]: the blocking present loop over a `RenderBoundary`
//! - [`config`]: style file, env and CLI resolution into `SessionConfig`
//! - [`content`]: the slide document

pub mod config;
pub mod content;
pub mod error;
pub mod format;
pub mod navigation;
pub mod pages;
pub mod session;
pub mod wrap;

pub use error::SessionError;
