#![forbid(unsafe_code)]

pub mod app_services;
pub mod dashboard_service;
pub mod error;
pub mod mock_test_service;
pub mod problem_service;
pub mod subject_service;

pub use app_services::AppServices;
pub use dashboard_service::{DashboardService, DashboardSummary};
pub use error::{
    AppServicesError, DashboardError, MockTestServiceError, ProblemServiceError,
    SubjectServiceError,
};
pub use mock_test_service::MockTestService;
pub use problem_service::ProblemService;
pub use subject_service::SubjectService;
