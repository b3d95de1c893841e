use trailhead_routing::Coordinate;

/// Accepts `lat,lng` with optional whitespace around either value.
pub fn parse_coordinate(input: &str) -> Result<Coordinate, String> {
    input.trim().parse::<Coordinate>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(
            parse_coordinate(" -33.86,151.21 ").unwrap(),
            Coordinate::new(-33.86, 151.21)
        );
        assert!(parse_coordinate("-33.86").is_err());
        assert!(parse_coordinate("inf,0").is_err());
    }
}
