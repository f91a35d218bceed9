pub mod docs;
pub mod inventory;
pub mod pages;
pub mod photo;
