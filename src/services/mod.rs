pub mod cache_service;
pub mod currency;
pub mod pricing_service;
pub mod room_catalog;
