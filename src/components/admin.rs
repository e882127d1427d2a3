//! 管理后台页面

pub mod bookings;
pub mod dashboard;
pub mod events;
pub mod gallery;
pub mod members;
