pub mod literal;
pub mod names;

pub use literal::*;
pub use names::*;
