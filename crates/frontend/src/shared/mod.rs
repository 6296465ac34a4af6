pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod directory;
pub mod icons;
pub mod invalidation;
pub mod page_frame;
pub mod page_standard;
pub mod resource;
pub mod storage;
pub mod toast;
