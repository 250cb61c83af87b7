use thiserror::Error;

/// Custom error type for coordinate extraction, allow us to differentiate between
/// a container we can not read at all and an encoding we can not make sense of.
///
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("can not parse image container: {0}")]
    MetadataRead(#[from] exif::Error),
    #[error("invalid coordinate encoding in {0:?}")]
    InvalidCoordinateFormat(String),
    #[error("coordinate is not finite: ({0}, {1})")]
    NotFinite(f64, f64),
}
