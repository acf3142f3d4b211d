/// Application layer - Use cases, view reconciliation and DTOs
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dashboard_app;
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
pub mod view;

pub use dashboard_app::{DashboardApp, PageController};
