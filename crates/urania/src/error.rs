use thiserror::Error;

/// Errors raised at the boundary of the placement engine.
///
/// Once inputs pass validation the resolvers cannot fail; overcrowded
/// rings degrade to overlapping output instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid input: {field} of '{id}' is not finite ({value})")]
    InvalidInput {
        id: String,
        field: &'static str,
        value: f64,
    },
    #[error("Invalid house number: {0} (expected 1-12)")]
    InvalidHouse(u8),
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
