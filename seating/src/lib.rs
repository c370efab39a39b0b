pub use errors::*;
pub use generator::*;
pub use participant::*;
pub use record::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod errors;
mod generator;
mod participant;
mod record;
mod visualization;
