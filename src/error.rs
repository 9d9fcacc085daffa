//! Defines [`GeoJsonGeosError`], representing all errors returned by this crate.

use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoJsonGeosError {
    /// A known geometry kind that has no conversion in the requested direction.
    #[error("Not yet implemented: {0}")]
    NotYetImplemented(Cow<'static, str>),

    /// A nested conversion produced a different geometry kind than its parent requires.
    #[error("Expected {expected}, received {found}")]
    IncorrectType {
        expected: &'static str,
        found: Cow<'static, str>,
    },

    /// The input is outside the set of geometry kinds this crate knows about.
    #[error("Unexpected type: {0}")]
    UnexpectedType(Cow<'static, str>),

    /// The input is structurally malformed, e.g. a polygon without rings.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(Cow<'static, str>),

    /// A coordinate sequence is longer than GEOS can address.
    #[error("Overflow")]
    Overflow,

    /// [geos::Error]
    #[error(transparent)]
    GeosError(#[from] geos::Error),

    /// [geojson::Error]
    #[error(transparent)]
    GeoJsonError(#[from] geojson::Error),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoJsonGeosError>;
