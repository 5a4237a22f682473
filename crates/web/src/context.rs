use std::sync::Arc;

use services::{AppServices, DashboardService, MockTestService, ProblemService, SubjectService};

/// Shared handler state. Cloned into every request; holds no per-request data.
#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
}

impl AppContext {
    #[must_use]
    pub fn new(services: AppServices) -> Self {
        Self { services }
    }

    #[must_use]
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    #[must_use]
    pub fn problems(&self) -> Arc<ProblemService> {
        self.services.problems()
    }

    #[must_use]
    pub fn subjects(&self) -> Arc<SubjectService> {
        self.services.subjects()
    }

    #[must_use]
    pub fn mock_tests(&self) -> Arc<MockTestService> {
        self.services.mock_tests()
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }
}
