use tracing::instrument;

use educapost_core::AppError;
use educapost_db::Store;
use educapost_models::{Category, CategoryList};

pub const CATEGORY_NOT_FOUND: &str = "Category not found";

pub struct CategoryService;

impl CategoryService {
    /// Active categories only, by `order` then id.
    #[instrument(skip(store))]
    pub async fn list_categories(store: &dyn Store) -> Result<CategoryList, AppError> {
        let items = store.list_active_categories().await?;
        Ok(CategoryList { items })
    }

    /// Inactive categories are still visible by id.
    #[instrument(skip(store))]
    pub async fn get_category(store: &dyn Store, id: i32) -> Result<Category, AppError> {
        store
            .find_category(id)
            .await?
            .ok_or_else(|| AppError::not_found(CATEGORY_NOT_FOUND))
    }
}
