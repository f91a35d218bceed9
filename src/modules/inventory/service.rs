use log::{info, warn};
use std::sync::Arc;
use validator::Validate;

use crate::api::error;
use crate::modules::inventory::model::{
    InsertItem, ItemResponse, NewItemModel, SearchForm, SearchResponse, UpdateItemModel,
};
use crate::modules::inventory::{repository::InventoryRepository, schema::ItemEntity};
use crate::modules::photo::{NewPhoto, PhotoStorage};
use crate::utils::parse_leading_id;

#[derive(Clone)]
pub struct InventoryService {
    repo: Arc<dyn InventoryRepository + Send + Sync>,
    photos: Arc<PhotoStorage>,
}

impl InventoryService {
    pub fn with_dependencies(
        repo: Arc<dyn InventoryRepository + Send + Sync>,
        photos: Arc<PhotoStorage>,
    ) -> Self {
        info!("InventoryService initialized with photo root {}", photos.root().display());
        InventoryService { repo, photos }
    }

    async fn find(&self, id: u64) -> Result<ItemEntity, error::SystemError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Item not found"))
    }

    /// Largest photo upload accepted, in bytes.
    pub fn max_photo_size(&self) -> usize {
        self.photos.max_size()
    }

    /// Fails with not found for an unknown id; lets callers check the item
    /// before reading a request body.
    pub async fn ensure_exists(&self, id: u64) -> Result<(), error::SystemError> {
        self.find(id).await.map(|_| ())
    }

    /// The table change is already done when this runs, so a file that
    /// cannot be removed is only logged.
    async fn discard_photo(&self, filename: &str) {
        if let Err(e) = self.photos.delete(filename).await {
            warn!("Could not remove photo {}: {}", filename, e);
        }
    }

    /// Validates the name before anything is written, so a rejected
    /// registration leaves neither a table entry nor a photo file behind.
    pub async fn register(&self, item: NewItemModel) -> Result<u64, error::SystemError> {
        item.validate()?;

        let photo_filename = match &item.photo {
            Some(photo) => Some(self.photos.save(&photo.bytes, &photo.original_filename).await?),
            None => None,
        };

        let insert = InsertItem {
            inventory_name: item.inventory_name,
            description: item.description.unwrap_or_default(),
            photo_filename,
        };

        match self.repo.create(&insert).await {
            Ok(entity) => {
                info!("Registered item {} ({})", entity.id, entity.inventory_name);
                Ok(entity.id)
            }
            Err(e) => {
                if let Some(filename) = &insert.photo_filename {
                    self.photos.delete(filename).await.ok();
                }
                Err(e)
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<ItemResponse>, error::SystemError> {
        let items = self.repo.find_all().await?;
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: u64) -> Result<ItemResponse, error::SystemError> {
        Ok(ItemResponse::from(self.find(id).await?))
    }

    pub async fn update(&self, id: u64, item: UpdateItemModel) -> Result<(), error::SystemError> {
        if item.is_empty() {
            // Nothing to change, but an unknown id is still reported.
            self.find(id).await?;
            return Ok(());
        }
        self.repo.update(id, &item).await?;
        info!("Updated item {}", id);
        Ok(())
    }

    /// The item's photo file, opened for streaming. Missing item, missing
    /// photo and a file removed from disk are all not found.
    pub async fn get_photo(&self, id: u64) -> Result<tokio::fs::File, error::SystemError> {
        let filename = self
            .repo
            .find_by_id(id)
            .await?
            .and_then(|item| item.photo_filename)
            .ok_or_else(|| error::SystemError::not_found("Photo not found"))?;

        if !self.photos.exists(&filename).await {
            warn!("Photo {} of item {} is missing on disk", filename, id);
            return Err(error::SystemError::not_found("Photo file not found"));
        }
        self.photos.read(&filename).await
    }

    /// Writes the new photo first and records it, then removes the old file.
    /// A failed write leaves the item pointing at its previous photo.
    pub async fn replace_photo(
        &self,
        id: u64,
        photo: Option<NewPhoto>,
    ) -> Result<(), error::SystemError> {
        self.find(id).await?;
        let photo = photo.ok_or_else(|| error::SystemError::bad_request("Photo is required"))?;

        let filename = self.photos.save(&photo.bytes, &photo.original_filename).await?;
        let previous = match self.repo.set_photo(id, filename.clone()).await {
            Ok(previous) => previous,
            Err(e) => {
                self.photos.delete(&filename).await.ok();
                return Err(e);
            }
        };

        if let Some(previous) = previous {
            self.discard_photo(&previous).await;
        }
        info!("Replaced photo of item {}", id);
        Ok(())
    }

    pub async fn delete(&self, id: u64) -> Result<(), error::SystemError> {
        let removed = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Item not found"))?;

        if let Some(filename) = &removed.photo_filename {
            self.discard_photo(filename).await;
        }
        info!("Deleted item {}", id);
        Ok(())
    }

    pub async fn search(&self, form: SearchForm) -> Result<SearchResponse, error::SystemError> {
        let id = form
            .id
            .as_deref()
            .and_then(parse_leading_id)
            .ok_or_else(|| error::SystemError::not_found("Item not found"))?;

        let item = self.find(id).await?;
        Ok(SearchResponse::from_entity(item, form.wants_photo()))
    }
}
