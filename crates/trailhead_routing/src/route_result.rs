use crate::coordinate::Coordinate;

/// An ordered path from the start of a route to its end.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    waypoints: Vec<Coordinate>,
}

impl RouteResult {
    pub(crate) fn new(waypoints: Vec<Coordinate>) -> Self {
        Self { waypoints }
    }

    pub fn waypoints(&self) -> &[Coordinate] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn first(&self) -> Option<&Coordinate> {
        self.waypoints.first()
    }

    pub fn last(&self) -> Option<&Coordinate> {
        self.waypoints.last()
    }
}

impl From<&RouteResult> for geo_types::LineString<f64> {
    fn from(route: &RouteResult) -> Self {
        geo_types::LineString::new(
            route
                .waypoints
                .iter()
                .map(geo_types::Coord::<f64>::from)
                .collect(),
        )
    }
}
