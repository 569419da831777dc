mod station;
mod train;

pub use station::Station;
pub use train::{Direction, TrainSnapshot};
