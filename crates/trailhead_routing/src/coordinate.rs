use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
};

/// A geographic point in decimal degrees.
///
/// Equality and hashing compare the exact bit patterns of both fields, so two
/// coordinates that print the same but differ in the last ulp are distinct,
/// and `0.0` is not equal to `-0.0`. No range validation is performed.
#[derive(Copy, Clone, Debug)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            lat: latitude,
            lng: longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.lat
    }

    pub fn longitude(&self) -> f64 {
        self.lng
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.lat.to_bits() == other.lat.to_bits() && self.lng.to_bits() == other.lng.to_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.lat.to_bits());
        state.write_u64(self.lng.to_bits());
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coordinate {
    type Err = String;

    /// Parses `"lat,lng"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("Expected `lat,lng`, got `{s}`"))?;

        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid latitude `{lat}`: {e}"))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid longitude `{lng}`: {e}"))?;

        if !lat.is_finite() || !lng.is_finite() {
            return Err(format!("Coordinate `{s}` is not finite"));
        }

        Ok(Coordinate::new(lat, lng))
    }
}

impl From<&Coordinate> for geo_types::Point {
    fn from(coordinate: &Coordinate) -> Self {
        geo_types::Point::new(coordinate.lng, coordinate.lat)
    }
}

impl From<&Coordinate> for geo_types::Coord<f64> {
    fn from(coordinate: &Coordinate) -> Self {
        geo_types::Coord {
            x: coordinate.lng,
            y: coordinate.lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::hash::BuildHasher;

    use fxhash::FxBuildHasher;

    use super::*;

    fn hash_of(coordinate: &Coordinate) -> u64 {
        FxBuildHasher::default().hash_one(coordinate)
    }

    #[test]
    fn test_equal_bits_are_equal_and_hash_identically() {
        let a = Coordinate::new(49.2, -123.1);
        let b = Coordinate::new(49.2, -123.1);

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_close_values_are_distinct() {
        let a = Coordinate::new(49.2, -123.1);
        let b = Coordinate::new(f64::from_bits(49.2_f64.to_bits() + 1), -123.1);

        assert_ne!(a, b);
    }

    #[test]
    fn test_signed_zero_is_distinct() {
        assert_ne!(Coordinate::new(0.0, 0.0), Coordinate::new(-0.0, 0.0));
    }

    #[test]
    fn test_swapped_fields_are_distinct() {
        let a = Coordinate::new(1.0, 2.0);
        let b = Coordinate::new(2.0, 1.0);

        assert_ne!(a, b);
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_no_range_validation() {
        let coordinate = Coordinate::new(123.0, 500.0);

        assert_eq!(coordinate.latitude(), 123.0);
        assert_eq!(coordinate.longitude(), 500.0);
    }

    #[test]
    fn test_parse() {
        let coordinate: Coordinate = "49.2, -123.1".parse().unwrap();
        assert_eq!(coordinate, Coordinate::new(49.2, -123.1));

        assert!("49.2".parse::<Coordinate>().is_err());
        assert!("north,-123.1".parse::<Coordinate>().is_err());
        assert!("NaN,1.0".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_into_point() {
        let point: geo_types::Point = (&Coordinate::new(49.2, -123.1)).into();

        assert_eq!(point.x(), -123.1);
        assert_eq!(point.y(), 49.2);
    }
}
