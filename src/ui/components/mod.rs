//! Components shared by the dashboard and insights views

pub mod alerts;
pub mod footer;
pub mod header;
pub mod notifications;
