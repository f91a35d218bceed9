use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpServer,
};
use std::sync::Arc;

use crate::{
    constants::Config,
    modules::{
        inventory::{InventoryRepositoryMemory, InventoryService},
        photo::PhotoStorage,
    },
};

mod api;
mod configs;
mod constants;
mod modules;
mod utils;

pub fn create_app(
    inventory_service: InventoryService,
    api_doc: utoipa::openapi::OpenApi,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let max_photo_size = inventory_service.max_photo_size();
    App::new()
        .wrap(Logger::default())
        .app_data(web::Data::new(inventory_service))
        .app_data(configs::json_config())
        .app_data(configs::form_config())
        .app_data(configs::path_config())
        .app_data(configs::multipart_config(max_photo_size))
        .configure(modules::pages::configure)
        .configure(modules::inventory::route::configure)
        .configure(modules::docs::configure(api_doc))
        .default_service(web::to(modules::inventory::handle::method_not_allowed))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::load();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let photos = PhotoStorage::open(&config.cache_dir)
        .map_err(|e| std::io::Error::other(format!("Cache directory error: {e}")))?
        .with_max_size(config.max_photo_size);

    let inventory_service = InventoryService::with_dependencies(
        Arc::new(InventoryRepositoryMemory::new()),
        Arc::new(photos),
    );
    let base_url = config.base_url();
    let api_doc = modules::docs::api_doc(&base_url);

    log::info!("=== Inventory service ===");
    log::info!("Server running at {}", base_url);
    log::info!("Cache directory: {}", config.cache_dir.display());
    log::info!("API documentation: {}/docs/", base_url);

    HttpServer::new(move || create_app(inventory_service.clone(), api_doc.clone()))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
