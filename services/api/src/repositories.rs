//! Repositories for dashboard data

pub mod dashboard;

pub use dashboard::DashboardRepository;
