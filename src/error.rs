use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Frame source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Extraction region out of bounds: {0}")]
    OutOfBounds(String),

    #[error("Invalid image geometry: {0}")]
    InvalidGeometry(String),

    #[error("JPEG encode error: {0}")]
    JpegEncodeError(String),

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    #[error("iteration {iteration}, stage {stage}: {source}")]
    Stage {
        iteration: u32,
        stage: &'static str,
        #[source]
        source: Box<CaptureError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Generates factory methods for [`CaptureError`] variants that wrap a `String`.
macro_rules! error_constructors {
    ($(
        $(#[doc = $doc:expr])*
        $method:ident => $variant:ident
    ),* $(,)?) => {
        impl CaptureError {
            $(
                $(#[doc = $doc])*
                pub fn $method(msg: impl Into<String>) -> Self {
                    Self::$variant(msg.into())
                }
            )*
        }
    };
}

error_constructors! {
    /// Create a configuration error.
    config => ConfigError,
    /// Create a frame source error.
    source_unavailable => SourceUnavailable,
    /// Create an out-of-bounds extraction error.
    out_of_bounds => OutOfBounds,
    /// Create an invalid geometry error.
    invalid_geometry => InvalidGeometry,
    /// Create a JPEG encode error.
    jpeg_encode => JpegEncodeError,
    /// Create a persistence error.
    persistence => PersistenceFailure,
}

impl CaptureError {
    /// Wrap an error with the capture-loop iteration and stage it occurred in.
    pub fn at_stage(self, iteration: u32, stage: &'static str) -> Self {
        Self::Stage {
            iteration,
            stage,
            source: Box::new(self),
        }
    }
}

impl From<serde_yml::Error> for CaptureError {
    fn from(e: serde_yml::Error) -> Self {
        Self::ConfigError(e.to_string())
    }
}

impl From<image::ImageError> for CaptureError {
    fn from(e: image::ImageError) -> Self {
        Self::JpegEncodeError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CaptureError>;
