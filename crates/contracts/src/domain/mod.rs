pub mod a001_member;
pub mod a002_absence;
pub mod common;
