pub mod content_service;
pub mod image_service;
pub mod pricing_service;
pub mod validation;
