pub mod model;
pub mod storage;

pub use model::NewPhoto;
pub use storage::PhotoStorage;
