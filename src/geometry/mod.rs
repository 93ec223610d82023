pub mod area;
pub mod bounds;
pub mod echo;
pub mod extremes;
pub mod perms;
pub mod shapes;

pub use area::{
    VertexFilter, count_matching, doubled_area, doubled_area_sum, doubled_signed_area, mean_area,
};
pub use bounds::{BoundingBox, in_frame};
pub use echo::remove_echoes;
pub use extremes::{Extremum, Metric, select};
pub use perms::{count_permutations, is_permutation};
pub use shapes::{count_intersections, count_right_shapes, has_right_angle, polygons_intersect};
