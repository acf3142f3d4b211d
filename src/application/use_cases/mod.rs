/// Use cases module containing application business logic orchestration
mod dashboard_controller;

pub use dashboard_controller::DashboardController;
