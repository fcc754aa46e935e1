use std::num::ParseIntError;
use thiserror::Error;

/// Errors produced when parsing a [`Coordinate`](crate::Coordinate) from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// The input has no `,` between the two components.
    #[error("expected a coordinate in `x,y` form, got {0:?}")]
    MissingSeparator(String),

    /// One of the components is not a valid integer for the coordinate type.
    #[error("invalid coordinate component {component:?}: {source}")]
    InvalidComponent {
        component: String,
        #[source]
        source: ParseIntError,
    },
}
