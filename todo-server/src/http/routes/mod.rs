//! Route handlers organized by resource

pub mod home;
pub mod todos;
