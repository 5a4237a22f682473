mod draft;
mod ids;
mod problem;
mod subject;

pub use draft::DraftError;
pub use ids::{MockTestId, ParseIdError, ProblemId, SubjectId};

pub use mock_test::{MockTest, MockTestDraft, NewMockTest};
pub use problem::{NewProblem, Problem, ProblemDraft, ProblemFilter, SOLVED};
pub use subject::{COMPLETED, NewSubject, Subject, SubjectDraft};
