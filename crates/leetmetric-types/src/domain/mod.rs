mod profile;
mod username;

pub use profile::{ProfileStats, Tier};
pub use username::Username;
