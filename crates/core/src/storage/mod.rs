mod error;
mod traits;
mod validation;

pub use error::{BoxError, DaoError, Result};
pub use traits::CrudRepository;
pub use validation::validate_entity;
