use prep_core::model::{Subject, SubjectId};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubjectRowVm {
    pub id: SubjectId,
    pub subject: String,
    pub topic: String,
    pub status: String,
    pub completed: bool,
    pub delete_url: String,
}

impl From<Subject> for SubjectRowVm {
    fn from(s: Subject) -> Self {
        Self {
            completed: s.is_completed(),
            delete_url: format!("/delete/subjects/{}", s.id),
            id: s.id,
            subject: s.subject,
            topic: s.topic,
            status: s.status,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubjectListVm {
    pub data: Vec<SubjectRowVm>,
}

impl SubjectListVm {
    #[must_use]
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self {
            data: subjects.into_iter().map(SubjectRowVm::from).collect(),
        }
    }
}
