use thiserror::Error;

/// Broad classes of [FitError], so callers can tell a bug in their own code
/// apart from bad input data
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument had the wrong shape (e.g. an unusable font handle)
    Type,
    /// An option value was invalid or contradicted another option
    Config,
    /// Font data could not be parsed
    Font,
    /// Writing output failed
    Io,
}

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum FitError {
    #[error("missing fontObject parameter: {0}")]
    /// The font reported metrics that cannot be scaled (e.g. zero units per em)
    InvalidFont(String),

    #[error("min font size larger than max ({min} > {max})")]
    /// `min_size` was larger than `max_size`
    SizeRange { min: f32, max: f32 },

    #[error("invalid granularity: {0}")]
    /// The size step was zero, negative or not a number
    Granularity(f32),

    #[error("invalid hAlign: {0}")]
    /// Unrecognized horizontal alignment token
    HAlign(String),

    #[error("invalid vAlign: {0}")]
    /// Unrecognized vertical alignment token
    VAlign(String),

    #[error("invalid fitMethod: {0}")]
    /// Unrecognized fit method token
    FitMethod(String),

    #[error("invalid colour: {0}")]
    /// A colour string could not be parsed
    InvalidColour(String),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}

impl FitError {
    /// Which class of error this is
    pub fn kind(&self) -> ErrorKind {
        match self {
            FitError::InvalidFont(_) => ErrorKind::Type,
            FitError::SizeRange { .. }
            | FitError::Granularity(_)
            | FitError::HAlign(_)
            | FitError::VAlign(_)
            | FitError::FitMethod(_)
            | FitError::InvalidColour(_) => ErrorKind::Config,
            FitError::Io(_) => ErrorKind::Io,
            FitError::FaceParsing(_) => ErrorKind::Font,
        }
    }
}
