use thiserror::Error;

/// Errors raised while parsing inputs, projecting, or writing results.
#[derive(Error, Debug)]
pub enum RoiError {
    #[error("invalid value for {field}: {value:?} is not a number")]
    InputParse { field: &'static str, value: String },
    #[error("production cost is zero in year {year}, ROI is undefined")]
    DivisionByZero { year: u32 },
    #[error("ROI for year {year} is not a finite number")]
    NonFiniteRoi { year: u32 },
    #[error("chart size {width}x{height} must be between 1 and {max} pixels per side")]
    ChartSize { width: u32, height: u32, max: u32 },
    #[error("Font error: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RoiError {
    /// True for errors the user can fix by correcting an input field.
    pub fn is_input_error(&self) -> bool {
        matches!(self, RoiError::InputParse { .. })
    }
}
