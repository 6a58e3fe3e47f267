mod types;

pub use types::{Identifiable, Unicorn};
