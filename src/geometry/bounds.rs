use crate::domain::{Point, Polygon};

/// Axis-aligned frame spanning every vertex of a polygon collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    /// Create a frame from a set of points
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        bounds.expand(rest);
        Some(bounds)
    }

    /// Frame of every vertex of every polygon, `None` for an empty collection
    pub fn from_polygons(polygons: &[Polygon]) -> Option<Self> {
        let (first, rest) = polygons.split_first()?;
        let mut bounds = Self::from_points(first.points())?;
        for polygon in rest {
            bounds.expand(polygon.points());
        }
        Some(bounds)
    }

    /// Expand the frame to include another set of points
    pub fn expand(&mut self, points: &[Point]) {
        for point in points {
            self.min_x = self.min_x.min(point.x);
            self.min_y = self.min_y.min(point.y);
            self.max_x = self.max_x.max(point.x);
            self.max_y = self.max_y.max(point.y);
        }
    }

    /// Closed-interval containment on both axes
    pub fn contains(&self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }

    pub fn contains_polygon(&self, polygon: &Polygon) -> bool {
        polygon.points().iter().all(|&p| self.contains(p))
    }
}

/// Whether `query` fits in the frame of `polygons`, `None` if there is no frame
pub fn in_frame(polygons: &[Polygon], query: &Polygon) -> Option<bool> {
    BoundingBox::from_polygons(polygons).map(|frame| frame.contains_polygon(query))
}
