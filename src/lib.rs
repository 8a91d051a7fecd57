//! B1 HQ executive brief derivation.
//!
//! The core is [`brief::derive`]: a pure function from a raw [`Brief`]
//! record and a reference date to the [`BriefView`] the dashboard renders.
//! Loading and rendering live at the edges; the deriver never touches the
//! clock or the filesystem, which is what makes each page render an
//! independent, stateless invocation.

pub mod brief;
pub mod error;
pub mod loader;
pub mod render;
pub mod types;
mod util;

pub use brief::derive;
pub use error::BriefError;
pub use loader::{load_brief, load_landing};
pub use render::{render_brief, render_landing};
pub use types::{Brief, BriefView, ChurnRisk, Kpis, LandingPage};
