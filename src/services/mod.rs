pub mod ads_service;
pub mod catalog_client;
pub mod category_icons;
pub mod field_renderer;
pub mod field_schema;
pub mod form_layout;
pub mod image_service;
pub mod navigator;
