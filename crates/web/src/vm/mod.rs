mod dashboard_vm;
mod mock_test_vm;
mod problem_vm;
mod subject_vm;

pub use dashboard_vm::DashboardVm;
pub use mock_test_vm::{MockTestListVm, MockTestRowVm};
pub use problem_vm::{ProblemListVm, ProblemRowVm};
pub use subject_vm::{SubjectListVm, SubjectRowVm};
