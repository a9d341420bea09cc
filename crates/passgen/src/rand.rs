mod interface;
mod rng_source;
mod seeded;
mod thread_random;

pub use interface::*;
pub use rng_source::*;
pub use seeded::*;
pub use thread_random::*;
