use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::CoordinateError;

/// Integer types that can address a grid axis.
///
/// Implemented for every primitive integer type. `MIN` and `MAX` bound the
/// axis so that a whole row can be selected as a key range.
pub trait GridIndex:
    Copy + Ord + Hash + fmt::Debug + fmt::Display + FromStr<Err = ParseIntError>
{
    const MIN: Self;
    const MAX: Self;
}

macro_rules! impl_grid_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl GridIndex for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
            }
        )*
    };
}

impl_grid_index!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A cell position `(x, y)`.
///
/// Coordinates order by `x` first and break ties on `y`, which is also the
/// order in which a [`SparseGrid`](crate::SparseGrid) yields its cells.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate<I = i64> {
    x: I,
    y: I,
}

impl<I: GridIndex> Coordinate<I> {
    pub const fn new(x: I, y: I) -> Self {
        Coordinate { x, y }
    }

    /// Row component.
    pub fn x(&self) -> I {
        self.x
    }

    /// Column component.
    pub fn y(&self) -> I {
        self.y
    }

    /// First coordinate of row `x`.
    pub(crate) fn row_start(x: I) -> Self {
        Coordinate::new(x, I::MIN)
    }

    /// Last coordinate of row `x`.
    pub(crate) fn row_end(x: I) -> Self {
        Coordinate::new(x, I::MAX)
    }
}

impl<I: GridIndex> From<(I, I)> for Coordinate<I> {
    fn from((x, y): (I, I)) -> Self {
        Coordinate::new(x, y)
    }
}

impl<I: GridIndex> From<Coordinate<I>> for (I, I) {
    fn from(coord: Coordinate<I>) -> Self {
        (coord.x, coord.y)
    }
}

impl<I: GridIndex> fmt::Display for Coordinate<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses the `x,y` form produced by `Display`.
///
/// ```
/// use sparsegrid_core::Coordinate;
///
/// let coord: Coordinate = "-3, 2".parse().unwrap();
/// assert_eq!((coord.x(), coord.y()), (-3, 2));
/// ```
impl<I: GridIndex> FromStr for Coordinate<I> {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| CoordinateError::MissingSeparator(s.to_string()))?;
        Ok(Coordinate::new(parse_component(x)?, parse_component(y)?))
    }
}

fn parse_component<I: GridIndex>(text: &str) -> Result<I, CoordinateError> {
    let text = text.trim();
    text.parse().map_err(|source| CoordinateError::InvalidComponent {
        component: text.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_x_then_y() {
        let a = Coordinate::<i64>::new(-3, 1);
        let b = Coordinate::<i64>::new(-3, 2);
        let c = Coordinate::<i64>::new(0, 0);
        let d = Coordinate::<i64>::new(0, -100);

        assert!(a < b);
        assert!(b < c);
        assert!(d < c);
        assert!(b < d);

        let mut coords = vec![c, a, d, b];
        coords.sort();
        assert_eq!(coords, vec![a, b, d, c]);
    }

    #[test]
    fn test_row_bounds_enclose_row() {
        let start = Coordinate::<i64>::row_start(7);
        let end = Coordinate::<i64>::row_end(7);

        assert!(start <= Coordinate::new(7, i64::MIN));
        assert!(end >= Coordinate::new(7, i64::MAX));
        assert!(Coordinate::new(6, i64::MAX) < start);
        assert!(Coordinate::new(8, i64::MIN) > end);
    }

    #[test]
    fn test_tuple_conversions() {
        let coord: Coordinate<i32> = (4, -9).into();
        assert_eq!(coord.x(), 4);
        assert_eq!(coord.y(), -9);

        let pair: (i32, i32) = coord.into();
        assert_eq!(pair, (4, -9));
    }

    #[test]
    fn test_display_and_parse() {
        let coord = Coordinate::<i64>::new(-12, 40);
        assert_eq!(coord.to_string(), "-12,40");
        assert_eq!(coord.to_string().parse::<Coordinate>(), Ok(coord));

        assert_eq!(" 1 ,  2 ".parse::<Coordinate>(), Ok(Coordinate::new(1, 2)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "12".parse::<Coordinate>(),
            Err(CoordinateError::MissingSeparator("12".to_string()))
        );

        match "1,x".parse::<Coordinate>() {
            Err(CoordinateError::InvalidComponent { component, .. }) => assert_eq!(component, "x"),
            other => panic!("unexpected result: {:?}", other),
        }

        // A third component ends up inside y
        match "1,2,3".parse::<Coordinate>() {
            Err(CoordinateError::InvalidComponent { component, .. }) => {
                assert_eq!(component, "2,3")
            }
            other => panic!("unexpected result: {:?}", other),
        }

        // Out of range for the narrower index type
        assert!("300,0".parse::<Coordinate<u8>>().is_err());
        assert!("-1,0".parse::<Coordinate<u32>>().is_err());
    }

    #[test]
    fn test_extreme_values() {
        let coord = Coordinate::<i64>::new(i64::MIN, i64::MAX);
        assert_eq!(coord.to_string().parse::<Coordinate>(), Ok(coord));
    }

    #[test]
    fn test_serde_shape() {
        let coord = Coordinate::<i64>::new(100, -5);
        let json = serde_json::to_string(&coord).unwrap();
        assert_eq!(json, r#"{"x":100,"y":-5}"#);

        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coord);
    }
}
