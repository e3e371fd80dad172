pub mod constants;
pub mod error;
mod growth;
mod helpers;
pub mod inputs;
pub mod projection;
pub mod summary;
pub mod chart;
pub mod report;
pub mod simulation;

pub use error::RoiError;
pub use helpers::format_thousands;
pub use inputs::{InputField, ModelInputs, RawInputs};
pub use projection::{project, ProjectionSeries};
