mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Cafe operations
    fn create_cafe(&self, cafe: &NewCafe) -> Result<Cafe>;
    fn get_cafe(&self, id: i64) -> Result<Option<Cafe>>;
    fn random_cafe(&self) -> Result<Option<Cafe>>;
    fn list_cafes(&self) -> Result<Vec<Cafe>>;
    fn find_cafes_by_location(&self, location: &str) -> Result<Vec<Cafe>>;
    fn update_coffee_price(&self, id: i64, new_price: Option<&str>) -> Result<()>;
    fn delete_cafe(&self, id: i64) -> Result<bool>;

    fn close(&self) -> Result<()>;
}
