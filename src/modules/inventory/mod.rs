pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_memory;
pub mod route;
pub mod schema;
pub mod service;

pub use repository_memory::InventoryRepositoryMemory;
pub use service::InventoryService;
