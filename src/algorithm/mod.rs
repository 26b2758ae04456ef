//! The algorithm pipeline: trapezoidation, inside/outside labelling,
//! monotone-mountain extraction, and mountain triangulation.

pub mod earclip;
pub mod inside;
pub mod mountain;
pub mod trapezoidation;

pub use self::earclip::triangulate_mountain;
pub use self::inside::{inside_trapezoids, is_inside};
pub use self::mountain::{extract_mountains, MonotoneMountain};
pub use self::trapezoidation::trapezoidate;
