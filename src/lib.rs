pub mod types;
pub mod digits;
pub mod statistics;
pub mod transition;
pub mod simulation;
pub mod utils;

pub use digits::{DigitSampler, DigitSequence, DigitSource, DigitSourceError, FileDigitSource};
pub use simulation::SimulationError;
pub use statistics::StatisticsError;
pub use types::{ResultPair, SimulationKind, TransitionMatrix};
