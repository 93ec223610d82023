pub mod point;
pub mod polygon;
pub mod tokens;

pub use point::Point;
pub use polygon::{MIN_VERTICES, ParseError, Parity, Polygon};
pub use tokens::Tokens;
