pub mod components;
pub mod config;
pub mod data;
pub mod export;
pub mod ical;
pub mod icons;
pub mod list_utils;
pub mod pagination;
pub mod selection;
