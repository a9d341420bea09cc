mod interface;
mod options;
mod passphrase;
mod password;
mod words;

pub use interface::*;
pub use options::*;
pub use passphrase::*;
pub use password::*;
pub use words::*;
