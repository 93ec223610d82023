use std::cmp::Ordering;

use crate::domain::Polygon;

use super::area::doubled_area;

/// Quantity compared by MIN and MAX
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Area,
    Vertexes,
}

impl Metric {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "AREA" => Some(Metric::Area),
            "VERTEXES" => Some(Metric::Vertexes),
            _ => None,
        }
    }

    fn compare(self, a: &Polygon, b: &Polygon) -> Ordering {
        match self {
            Metric::Area => doubled_area(a).cmp(&doubled_area(b)),
            Metric::Vertexes => a.vertex_count().cmp(&b.vertex_count()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

/// First polygon in collection order holding the extreme value of `metric`
///
/// A later polygon only replaces the current pick when it is strictly
/// better, so ties always go to the earliest one for both MIN and MAX.
pub fn select(polygons: &[Polygon], metric: Metric, extremum: Extremum) -> Option<&Polygon> {
    let wanted = match extremum {
        Extremum::Min => Ordering::Less,
        Extremum::Max => Ordering::Greater,
    };
    polygons.iter().reduce(|best, candidate| {
        if metric.compare(candidate, best) == wanted {
            candidate
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(text: &str) -> Polygon {
        text.parse().unwrap()
    }

    #[test]
    fn test_metric_keywords() {
        assert_eq!(Metric::from_keyword("AREA"), Some(Metric::Area));
        assert_eq!(Metric::from_keyword("VERTEXES"), Some(Metric::Vertexes));
        assert_eq!(Metric::from_keyword("area"), None);
    }

    #[test]
    fn test_select_by_area() {
        let polygons = vec![
            polygon("3 0 0 2 0 0 2"),
            polygon("4 0 0 3 0 3 3 0 3"),
            polygon("3 0 0 1 0 0 1"),
        ];
        let max = select(&polygons, Metric::Area, Extremum::Max).unwrap();
        let min = select(&polygons, Metric::Area, Extremum::Min).unwrap();
        assert_eq!(doubled_area(max), 18);
        assert_eq!(doubled_area(min), 1);
    }

    #[test]
    fn test_ties_resolve_to_earliest() {
        let polygons = vec![
            polygon("4 0 0 1 0 1 1 0 1"),
            polygon("4 5 5 6 5 6 6 5 6"),
            polygon("3 0 0 1 0 0 1"),
            polygon("3 7 7 8 7 7 8"),
        ];
        let max = select(&polygons, Metric::Vertexes, Extremum::Max).unwrap();
        assert!(std::ptr::eq(max, &polygons[0]));
        let min = select(&polygons, Metric::Vertexes, Extremum::Min).unwrap();
        assert!(std::ptr::eq(min, &polygons[2]));
        let max_area = select(&polygons, Metric::Area, Extremum::Max).unwrap();
        assert!(std::ptr::eq(max_area, &polygons[0]));
        let min_area = select(&polygons, Metric::Area, Extremum::Min).unwrap();
        assert!(std::ptr::eq(min_area, &polygons[2]));
    }

    #[test]
    fn test_single_polygon_is_both_extremes() {
        let polygons = vec![polygon("3 0 0 4 0 0 3")];
        for metric in [Metric::Area, Metric::Vertexes] {
            let min = select(&polygons, metric, Extremum::Min).unwrap();
            let max = select(&polygons, metric, Extremum::Max).unwrap();
            assert_eq!(min, max);
        }
    }

    #[test]
    fn test_empty_collection_has_no_extremes() {
        assert!(select(&[], Metric::Area, Extremum::Min).is_none());
        assert!(select(&[], Metric::Vertexes, Extremum::Max).is_none());
    }
}
