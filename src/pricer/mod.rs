pub mod primitive;

mod portfolio;
mod position;

pub use portfolio::*;
pub use position::*;
