pub mod api;
pub mod components;
pub mod error;
pub mod page;
pub mod state;
pub mod summary;
