pub mod calendar_export;
pub mod projection;
pub mod ui;
