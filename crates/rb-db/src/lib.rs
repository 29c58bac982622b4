pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::category_repository::CategoryRepository;
pub use repositories::recipe_repository::RecipeRepository;
pub use repositories::user_repository::UserRepository;
