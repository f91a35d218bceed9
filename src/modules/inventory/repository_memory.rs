use std::sync::{Mutex, MutexGuard};

use crate::{
    api::error,
    modules::inventory::{
        model::{InsertItem, UpdateItemModel},
        repository::InventoryRepository,
        schema::ItemEntity,
    },
};

#[derive(Debug)]
struct InventoryTable {
    items: Vec<ItemEntity>,
    next_id: u64,
}

/// Process-local inventory. Contents are lost on restart.
#[derive(Debug)]
pub struct InventoryRepositoryMemory {
    table: Mutex<InventoryTable>,
}

impl InventoryRepositoryMemory {
    pub fn new() -> Self {
        Self { table: Mutex::new(InventoryTable { items: Vec::new(), next_id: 1 }) }
    }

    fn table(&self) -> Result<MutexGuard<'_, InventoryTable>, error::SystemError> {
        self.table.lock().map_err(|_| error::SystemError::LockPoisoned)
    }
}

impl Default for InventoryRepositoryMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryTable {
    fn find_mut(&mut self, id: u64) -> Option<&mut ItemEntity> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

#[async_trait::async_trait]
impl InventoryRepository for InventoryRepositoryMemory {
    async fn create(&self, item: &InsertItem) -> Result<ItemEntity, error::SystemError> {
        if item.inventory_name.is_empty() {
            return Err(error::SystemError::bad_request("Item name is required"));
        }

        let mut table = self.table()?;
        let entity = ItemEntity {
            id: table.next_id,
            inventory_name: item.inventory_name.clone(),
            description: item.description.clone(),
            photo_filename: item.photo_filename.clone(),
        };
        table.next_id += 1;
        table.items.push(entity.clone());
        Ok(entity)
    }

    async fn find_all(&self) -> Result<Vec<ItemEntity>, error::SystemError> {
        Ok(self.table()?.items.clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<ItemEntity>, error::SystemError> {
        Ok(self.table()?.items.iter().find(|item| item.id == id).cloned())
    }

    async fn update(
        &self,
        id: u64,
        item: &UpdateItemModel,
    ) -> Result<ItemEntity, error::SystemError> {
        let mut table = self.table()?;
        let entity =
            table.find_mut(id).ok_or_else(|| error::SystemError::not_found("Item not found"))?;

        if let Some(name) = &item.inventory_name {
            entity.inventory_name = name.clone();
        }
        if let Some(description) = &item.description {
            entity.description = description.clone();
        }
        Ok(entity.clone())
    }

    async fn set_photo(
        &self,
        id: u64,
        photo_filename: String,
    ) -> Result<Option<String>, error::SystemError> {
        let mut table = self.table()?;
        let entity =
            table.find_mut(id).ok_or_else(|| error::SystemError::not_found("Item not found"))?;
        Ok(entity.photo_filename.replace(photo_filename))
    }

    async fn delete(&self, id: u64) -> Result<Option<ItemEntity>, error::SystemError> {
        let mut table = self.table()?;
        let removed = table
            .items
            .iter()
            .position(|item| item.id == id)
            .map(|index| table.items.remove(index));
        Ok(removed)
    }
}
