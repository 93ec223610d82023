//! Angle and overlap predicates, all evaluated in exact integer arithmetic

use crate::domain::{Point, Polygon};

fn sub(a: Point, b: Point) -> (i128, i128) {
    (
        i128::from(a.x) - i128::from(b.x),
        i128::from(a.y) - i128::from(b.y),
    )
}

fn cross(o: Point, a: Point, b: Point) -> i128 {
    let (ax, ay) = sub(a, o);
    let (bx, by) = sub(b, o);
    ax * by - ay * bx
}

/// Whether any vertex joins two non-degenerate edges at 90 degrees
pub fn has_right_angle(polygon: &Polygon) -> bool {
    let points = polygon.points();
    let n = points.len();
    (0..n).any(|i| {
        let corner = points[i];
        let (ax, ay) = sub(points[(i + n - 1) % n], corner);
        let (bx, by) = sub(points[(i + 1) % n], corner);
        let degenerate = (ax == 0 && ay == 0) || (bx == 0 && by == 0);
        !degenerate && ax * bx + ay * by == 0
    })
}

pub fn count_right_shapes(polygons: &[Polygon]) -> usize {
    polygons.iter().filter(|p| has_right_angle(p)).count()
}

/// `p` lies on the closed segment `a`-`b`, given the three are collinear
fn within_span(a: Point, b: Point, p: Point) -> bool {
    (a.x.min(b.x)..=a.x.max(b.x)).contains(&p.x) && (a.y.min(b.y)..=a.y.max(b.y)).contains(&p.y)
}

/// Closed segments `p1`-`p2` and `q1`-`q2` share at least one point
pub fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let d1 = cross(q1, q2, p1).signum();
    let d2 = cross(q1, q2, p2).signum();
    let d3 = cross(p1, p2, q1).signum();
    let d4 = cross(p1, p2, q2).signum();

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }
    (d1 == 0 && within_span(q1, q2, p1))
        || (d2 == 0 && within_span(q1, q2, p2))
        || (d3 == 0 && within_span(p1, p2, q1))
        || (d4 == 0 && within_span(p1, p2, q2))
}

/// Crossing-number test; points exactly on the boundary may go either way
fn contains_point(polygon: &Polygon, p: Point) -> bool {
    let mut inside = false;
    for (a, b) in polygon.edges() {
        if (a.y > p.y) == (b.y > p.y) {
            continue;
        }
        let lhs = (i128::from(p.x) - i128::from(a.x)) * (i128::from(b.y) - i128::from(a.y));
        let rhs = (i128::from(p.y) - i128::from(a.y)) * (i128::from(b.x) - i128::from(a.x));
        let crosses = if b.y > a.y { lhs < rhs } else { lhs > rhs };
        if crosses {
            inside = !inside;
        }
    }
    inside
}

/// Whether the two polygons share at least one point, boundary included
pub fn polygons_intersect(a: &Polygon, b: &Polygon) -> bool {
    let edges_cross = a
        .edges()
        .any(|(a1, a2)| b.edges().any(|(b1, b2)| segments_intersect(a1, a2, b1, b2)));
    edges_cross || contains_point(b, a.points()[0]) || contains_point(a, b.points()[0])
}

pub fn count_intersections(polygons: &[Polygon], query: &Polygon) -> usize {
    polygons
        .iter()
        .filter(|p| polygons_intersect(p, query))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(text: &str) -> Polygon {
        text.parse().unwrap()
    }

    #[test]
    fn test_right_angle_detection() {
        assert!(has_right_angle(&polygon("4 0 0 2 0 2 2 0 2")));
        assert!(has_right_angle(&polygon("3 0 0 3 0 0 4")));
        assert!(!has_right_angle(&polygon("3 0 0 4 0 2 3")));
    }

    #[test]
    fn test_right_angle_found_at_closing_vertex() {
        assert!(has_right_angle(&polygon("3 3 0 0 4 0 0")));
    }

    #[test]
    fn test_zero_length_edge_is_not_a_right_angle() {
        assert!(!has_right_angle(&polygon("3 0 0 0 0 5 1")));
    }

    #[test]
    fn test_count_right_shapes() {
        let polygons = vec![
            polygon("4 0 0 2 0 2 2 0 2"),
            polygon("3 0 0 4 0 2 3"),
            polygon("3 1 1 1 5 4 1"),
        ];
        assert_eq!(count_right_shapes(&polygons), 2);
    }

    #[test]
    fn test_segments() {
        let p = Point::new;
        assert!(segments_intersect(p(0, 0), p(2, 2), p(0, 2), p(2, 0)));
        assert!(segments_intersect(p(0, 0), p(2, 0), p(2, 0), p(3, 5)));
        assert!(segments_intersect(p(0, 0), p(4, 0), p(2, 0), p(6, 0)));
        assert!(!segments_intersect(p(0, 0), p(1, 0), p(2, 0), p(3, 0)));
        assert!(!segments_intersect(p(0, 0), p(1, 1), p(0, 1), p(-1, 2)));
    }

    #[test]
    fn test_overlapping_and_disjoint_polygons() {
        let square = polygon("4 0 0 4 0 4 4 0 4");
        assert!(polygons_intersect(&square, &polygon("3 2 2 6 2 6 6")));
        assert!(polygons_intersect(&square, &polygon("3 4 4 6 4 6 6")));
        assert!(!polygons_intersect(&square, &polygon("3 5 5 7 5 7 7")));
    }

    #[test]
    fn test_nested_polygons_intersect() {
        let outer = polygon("4 0 0 10 0 10 10 0 10");
        let inner = polygon("3 2 2 4 2 3 4");
        assert!(polygons_intersect(&outer, &inner));
        assert!(polygons_intersect(&inner, &outer));
    }

    #[test]
    fn test_count_intersections() {
        let polygons = vec![
            polygon("4 0 0 4 0 4 4 0 4"),
            polygon("3 10 10 12 10 12 12"),
            polygon("3 3 3 8 3 8 8"),
        ];
        assert_eq!(count_intersections(&polygons, &polygon("3 1 1 2 1 2 2")), 1);
        assert_eq!(count_intersections(&polygons, &polygon("4 2 2 11 2 11 11 2 11")), 3);
        assert_eq!(count_intersections(&polygons, &polygon("3 20 20 21 20 21 21")), 0);
    }
}
