use std::fmt::Display;

use crate::coordinate::Coordinate;

/// The (start, end) pair identifying a route request.
///
/// Keys are directional: the key for A to B differs from the key for B to A,
/// since the service may return a different path depending on the direction
/// of travel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EndpointKey {
    start: Coordinate,
    end: Coordinate,
}

impl EndpointKey {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Coordinate {
        &self.start
    }

    pub fn end(&self) -> &Coordinate {
        &self.end
    }

    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

impl Display for EndpointKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use std::hash::BuildHasher;

    use fxhash::FxBuildHasher;

    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = EndpointKey::new(Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0));
        let b = EndpointKey::new(Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0));

        assert_eq!(a, b);
        assert_eq!(
            FxBuildHasher::default().hash_one(a),
            FxBuildHasher::default().hash_one(b)
        );
    }

    #[test]
    fn test_direction_matters() {
        let a = Coordinate::new(49.26, -123.25);
        let b = Coordinate::new(49.28, -123.12);

        let key = EndpointKey::new(a, b);

        assert_ne!(key, EndpointKey::new(b, a));
        assert_eq!(key.reversed(), EndpointKey::new(b, a));
        assert_eq!(key.reversed().reversed(), key);
    }

    #[test]
    fn test_same_endpoints_reversed_is_equal() {
        let a = Coordinate::new(49.26, -123.25);
        let key = EndpointKey::new(a, a);

        assert_eq!(key, key.reversed());
    }
}
