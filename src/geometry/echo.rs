use crate::domain::Polygon;

/// Collapse runs of consecutive identical polygons down to one
///
/// With `only` set, just the runs of that particular polygon are collapsed.
/// The whole pass completes before returning. Returns how many polygons
/// were removed.
pub fn remove_echoes(polygons: &mut Vec<Polygon>, only: Option<&Polygon>) -> usize {
    let before = polygons.len();
    polygons.dedup_by(|current, previous| {
        *current == *previous && only.is_none_or(|target| *current == *target)
    });
    before - polygons.len()
}
