mod instrument;

pub use instrument::*;
