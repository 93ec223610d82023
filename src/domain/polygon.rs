use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Point, Tokens};

/// Smallest vertex count a polygon may have
pub const MIN_VERTICES: usize = 3;

/// Why a polygon definition was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing vertex count")]
    MissingVertexCount,

    #[error("invalid vertex count `{0}`")]
    InvalidVertexCount(String),

    #[error("a polygon needs at least {min} vertices, got {0}", min = MIN_VERTICES)]
    TooFewVertices(usize),

    #[error("expected {expected} coordinate pairs, input ended after {found}")]
    MissingCoordinates { expected: usize, found: usize },

    #[error("invalid coordinate `{0}`")]
    InvalidCoordinate(String),

    #[error("line is not valid UTF-8")]
    InvalidEncoding,
}

/// Vertex count parity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

/// An ordered ring of at least three vertices
///
/// Vertex order defines the edges, including the closing edge from the last
/// vertex back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Result<Self, ParseError> {
        if points.len() < MIN_VERTICES {
            return Err(ParseError::TooFewVertices(points.len()));
        }
        Ok(Self { points })
    }

    /// Read one polygon definition from the cursor
    ///
    /// Consumes the vertex count and exactly that many coordinate pairs.
    /// Anything left after the last pair stays in the cursor.
    pub fn read(tokens: &mut Tokens<'_>) -> Result<Self, ParseError> {
        let count_token = tokens.next().ok_or(ParseError::MissingVertexCount)?;
        let count: usize = count_token
            .parse()
            .map_err(|_| ParseError::InvalidVertexCount(count_token.to_string()))?;
        if count < MIN_VERTICES {
            return Err(ParseError::TooFewVertices(count));
        }

        let mut points = Vec::new();
        while points.len() < count {
            let x = read_coordinate(tokens, count, points.len())?;
            let y = read_coordinate(tokens, count, points.len())?;
            points.push(Point::new(x, y));
        }

        Self::new(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn parity(&self) -> Parity {
        if self.points.len() % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// Edges in traversal order, closing edge last
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .map(|(&a, &b)| (a, b))
    }
}

fn read_coordinate(
    tokens: &mut Tokens<'_>,
    expected: usize,
    found: usize,
) -> Result<i32, ParseError> {
    let token = tokens
        .next()
        .ok_or(ParseError::MissingCoordinates { expected, found })?;
    token
        .parse()
        .map_err(|_| ParseError::InvalidCoordinate(token.to_string()))
}

impl FromStr for Polygon {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::read(&mut Tokens::new(s))
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points.len())?;
        for point in &self.points {
            write!(f, " {}", point)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_triangle() {
        let polygon: Polygon = "3 0 0 4 0 0 -3".parse().unwrap();
        assert_eq!(
            polygon.points(),
            &[Point::new(0, 0), Point::new(4, 0), Point::new(0, -3)]
        );
        assert_eq!(polygon.vertex_count(), 3);
        assert_eq!(polygon.parity(), Parity::Odd);
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        let mut tokens = Tokens::new("4 0 0 1 0 1 1 0 1 junk 7");
        let polygon = Polygon::read(&mut tokens).unwrap();
        assert_eq!(polygon.parity(), Parity::Even);
        assert_eq!(tokens.collect::<Vec<_>>(), vec!["junk", "7"]);
    }

    #[test]
    fn test_parse_rejects_bad_vertex_count() {
        assert_eq!(
            "".parse::<Polygon>(),
            Err(ParseError::MissingVertexCount)
        );
        assert_eq!(
            "x 0 0 1 1 2 2".parse::<Polygon>(),
            Err(ParseError::InvalidVertexCount("x".to_string()))
        );
        assert_eq!(
            "-3 0 0 1 1 2 2".parse::<Polygon>(),
            Err(ParseError::InvalidVertexCount("-3".to_string()))
        );
        assert_eq!(
            "2 0 0 1 1".parse::<Polygon>(),
            Err(ParseError::TooFewVertices(2))
        );
    }

    #[test]
    fn test_parse_rejects_short_or_bad_coordinates() {
        assert_eq!(
            "3 0 0 1 1 2".parse::<Polygon>(),
            Err(ParseError::MissingCoordinates {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "3 0 0 1 one 2 2".parse::<Polygon>(),
            Err(ParseError::InvalidCoordinate("one".to_string()))
        );
    }

    #[test]
    fn test_new_enforces_minimum_size() {
        let err = Polygon::new(vec![Point::new(0, 0), Point::new(1, 1)]).unwrap_err();
        assert_eq!(err, ParseError::TooFewVertices(2));
    }

    #[test]
    fn test_display_round_trip() {
        let text = "5 -1 -1 3 0 4 4 0 6 -2 2";
        let polygon: Polygon = text.parse().unwrap();
        assert_eq!(polygon.to_string(), text);
        assert_eq!(polygon.to_string().parse::<Polygon>().unwrap(), polygon);
    }

    #[test]
    fn test_edges_wrap_around() {
        let polygon: Polygon = "3 0 0 1 0 0 1".parse().unwrap();
        let edges: Vec<_> = polygon.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Point::new(0, 1), Point::new(0, 0)));
    }

    proptest! {
        #[test]
        fn display_parses_back_to_the_same_polygon(
            coords in prop::collection::vec((any::<i32>(), any::<i32>()), MIN_VERTICES..16),
        ) {
            let polygon = Polygon::new(coords.into_iter().map(Point::from).collect()).unwrap();
            let text = polygon.to_string();
            prop_assert_eq!(text.parse::<Polygon>(), Ok(polygon));
        }
    }
}
