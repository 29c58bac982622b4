pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::category::Category;
pub use models::recipe::Recipe;
pub use models::user::User;
