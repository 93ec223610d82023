use crate::domain::{Parity, Point, Polygon};

/// Twice the signed shoelace area of a closed ring
///
/// Positive for counter-clockwise rings. Each cross term is a product of
/// two `i32` values, so `i128` accumulation is exact for any vertex count
/// a `Vec` can hold.
pub fn doubled_signed_area(points: &[Point]) -> i128 {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| {
            i128::from(a.x) * i128::from(b.y) - i128::from(b.x) * i128::from(a.y)
        })
        .sum()
}

/// Twice the unsigned area, exact
pub fn doubled_area(polygon: &Polygon) -> u128 {
    doubled_signed_area(polygon.points()).unsigned_abs()
}

/// Vertex-count predicate used by AREA and COUNT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexFilter {
    All,
    Parity(Parity),
    Exactly(usize),
}

impl VertexFilter {
    pub fn matches(self, polygon: &Polygon) -> bool {
        match self {
            VertexFilter::All => true,
            VertexFilter::Parity(parity) => polygon.parity() == parity,
            VertexFilter::Exactly(count) => polygon.vertex_count() == count,
        }
    }
}

/// Twice the summed area of every polygon accepted by `filter`, exact
pub fn doubled_area_sum(polygons: &[Polygon], filter: VertexFilter) -> u128 {
    polygons
        .iter()
        .filter(|p| filter.matches(p))
        .map(doubled_area)
        .sum()
}

/// Mean area over the whole collection, `None` when it is empty
///
/// The only area result that is rounded.
pub fn mean_area(polygons: &[Polygon]) -> Option<f64> {
    if polygons.is_empty() {
        return None;
    }
    let doubled = doubled_area_sum(polygons, VertexFilter::All);
    Some(doubled as f64 / 2.0 / polygons.len() as f64)
}

pub fn count_matching(polygons: &[Polygon], filter: VertexFilter) -> usize {
    polygons.iter().filter(|p| filter.matches(p)).count()
}
