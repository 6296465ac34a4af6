pub mod api_config;
pub mod api_error;
pub mod invalidation;
pub mod notification;
pub mod resource;
pub mod search;
