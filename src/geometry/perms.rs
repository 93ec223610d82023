use crate::domain::{Point, Polygon};

/// Whether two polygons hold the same multiset of vertices
///
/// Order is irrelevant; duplicated vertices must appear equally often in both.
pub fn is_permutation(a: &Polygon, b: &Polygon) -> bool {
    if a.vertex_count() != b.vertex_count() {
        return false;
    }
    sorted_points(a) == sorted_points(b)
}

/// Number of stored polygons that are permutations of `query`
pub fn count_permutations(polygons: &[Polygon], query: &Polygon) -> usize {
    polygons.iter().filter(|p| is_permutation(p, query)).count()
}

fn sorted_points(polygon: &Polygon) -> Vec<Point> {
    let mut points = polygon.points().to_vec();
    points.sort_unstable();
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn polygon(text: &str) -> Polygon {
        text.parse().unwrap()
    }

    #[test]
    fn test_reversed_and_shuffled_are_permutations() {
        let query = polygon("4 0 0 1 0 1 1 0 1");
        assert!(is_permutation(&query, &polygon("4 0 1 1 1 1 0 0 0")));
        assert!(is_permutation(&query, &polygon("4 1 1 0 0 0 1 1 0")));
    }

    #[test]
    fn test_differing_point_is_not_a_permutation() {
        let query = polygon("3 0 0 1 0 0 1");
        assert!(!is_permutation(&query, &polygon("3 0 0 1 0 0 2")));
    }

    #[test]
    fn test_multiplicity_matters() {
        let a = polygon("4 0 0 0 0 1 1 2 2");
        let b = polygon("4 0 0 1 1 1 1 2 2");
        assert!(!is_permutation(&a, &b));
    }

    #[test]
    fn test_vertex_count_must_match() {
        let triangle = polygon("3 0 0 1 0 0 1");
        let square = polygon("4 0 0 1 0 0 1 0 0");
        assert!(!is_permutation(&triangle, &square));
    }

    #[test]
    fn test_count_permutations() {
        let polygons = vec![
            polygon("3 0 0 1 0 0 1"),
            polygon("3 0 1 1 0 0 0"),
            polygon("3 0 0 1 0 0 2"),
            polygon("4 0 0 1 0 0 1 1 1"),
            polygon("3 1 0 0 1 0 0"),
        ];
        assert_eq!(count_permutations(&polygons, &polygon("3 0 0 0 1 1 0")), 3);
        assert_eq!(count_permutations(&[], &polygon("3 0 0 0 1 1 0")), 0);
    }

    proptest! {
        #[test]
        fn any_reordering_is_a_permutation(
            coords in prop::collection::vec((-50i32..50, -50i32..50), 3..10),
            shift in 0usize..10,
            reverse in any::<bool>(),
        ) {
            let points: Vec<Point> = coords.into_iter().map(Point::from).collect();
            let mut reordered = points.clone();
            reordered.rotate_left(shift % points.len());
            if reverse {
                reordered.reverse();
            }
            let a = Polygon::new(points).unwrap();
            let b = Polygon::new(reordered).unwrap();
            prop_assert!(is_permutation(&a, &b));
        }
    }
}
