use crate::{
    api::error,
    modules::inventory::{
        model::{InsertItem, UpdateItemModel},
        schema::ItemEntity,
    },
};

#[async_trait::async_trait]
pub trait InventoryRepository {
    /// Assigns the next id and appends the item. Fails on an empty name.
    async fn create(&self, item: &InsertItem) -> Result<ItemEntity, error::SystemError>;

    /// All items in insertion order.
    async fn find_all(&self) -> Result<Vec<ItemEntity>, error::SystemError>;

    async fn find_by_id(&self, id: u64) -> Result<Option<ItemEntity>, error::SystemError>;

    async fn update(
        &self,
        id: u64,
        item: &UpdateItemModel,
    ) -> Result<ItemEntity, error::SystemError>;

    /// Records a new photo filename and returns the one it replaced.
    async fn set_photo(
        &self,
        id: u64,
        photo_filename: String,
    ) -> Result<Option<String>, error::SystemError>;

    async fn delete(&self, id: u64) -> Result<Option<ItemEntity>, error::SystemError>;
}
