mod archive;
mod tournament;
pub use archive::*;
pub use tournament::*;

pub struct Config {
    pub rng: rand::rngs::StdRng,
    pub archive: archive::Archive,
}
