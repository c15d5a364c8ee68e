mod coordinate;
mod pass;

pub use coordinate::{Coordinate, OutOfRangeError};
pub use pass::Pass;
