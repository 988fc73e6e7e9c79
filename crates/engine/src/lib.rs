//! `leetsheet-engine` — problem catalog engine.
//!
//! Pure engine crate: receives raw rows, returns the ordered export rows.
//! No CLI or IO dependencies.

pub mod augment;
pub mod classify;
pub mod curated;
pub mod model;
pub mod normalize;
pub mod options;
pub mod pipeline;
pub mod split;
pub mod summary;

pub use classify::classify;
pub use model::{CanonicalRecord, Category, RawRecord};
pub use options::PipelineOptions;
pub use pipeline::organize;
pub use summary::summarize;
