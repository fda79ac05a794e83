//! Pipeline entry points for digest operations.
//!
//! - `highlight`: keyword highlighting for rendered text
//! - `render_digest`: HTML document assembly
//! - `run_digest`: the full query → filter → persist → render sequence

pub mod highlight;
pub mod render;
pub mod run;

pub use highlight::highlight;
pub use render::render_digest;
pub use run::{RunOutcome, run_digest};
