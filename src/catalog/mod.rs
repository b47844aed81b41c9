//! Static catalogs compiled into the crate.

mod assessments;
mod games;

pub use assessments::{find_assessment, ASSESSMENTS};
pub use games::{PredefinedGame, PREDEFINED_GAMES};
