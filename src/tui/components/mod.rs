//! # TUI Components
//!
//! Stateless, props-based components that draw one part of a page:
//!
//! - `Banner`: the coloured band with the centered, underlined title
//! - `SlideBody`: the pre-wrapped body lines
//!
//! Components receive external data as props, never by reaching into the
//! session. Everything they draw was decided by the core formatter.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── banner.rs       (title band)
//! └── slide_body.rs   (body text)
//! ```

mod banner;
mod slide_body;

pub use banner::Banner;
pub use slide_body::SlideBody;
