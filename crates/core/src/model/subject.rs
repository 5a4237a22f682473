use serde::{Deserialize, Serialize};

use crate::model::draft::{DraftError, required};
use crate::model::ids::SubjectId;

/// Status value that marks a subject topic as done.
pub const COMPLETED: &str = "Completed";

/// A study topic within an academic subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub subject: String,
    pub topic: String,
    pub status: String,
}

impl Subject {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == COMPLETED
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubject {
    pub subject: String,
    pub topic: String,
    pub status: String,
}

impl NewSubject {
    #[must_use]
    pub fn with_id(self, id: SubjectId) -> Subject {
        Subject {
            id,
            subject: self.subject,
            topic: self.topic,
            status: self.status,
        }
    }
}

/// Raw subject submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubjectDraft {
    pub subject: Option<String>,
    pub topic: Option<String>,
    pub status: Option<String>,
}

impl SubjectDraft {
    /// # Errors
    ///
    /// Returns `DraftError::MissingField` for the first absent field.
    pub fn validate(self) -> Result<NewSubject, DraftError> {
        Ok(NewSubject {
            subject: required("subject", self.subject)?,
            topic: required("topic", self.topic)?,
            status: required("status", self.status)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_missing_topic() {
        let draft = SubjectDraft {
            subject: Some("OS".into()),
            topic: None,
            status: Some("Completed".into()),
        };
        assert_eq!(
            draft.validate(),
            Err(DraftError::MissingField { field: "topic" })
        );
    }

    #[test]
    fn completed_is_case_sensitive() {
        let subject = NewSubject {
            subject: "DBMS".into(),
            topic: "Normalization".into(),
            status: "completed".into(),
        }
        .with_id(SubjectId::new(1));
        assert!(!subject.is_completed());
    }
}
