use std::sync::Arc;

use prep_core::model::{Subject, SubjectDraft, SubjectId};
use storage::repository::SubjectRepository;

use crate::error::SubjectServiceError;

/// Create, list and delete study subjects.
#[derive(Clone)]
pub struct SubjectService {
    subjects: Arc<dyn SubjectRepository>,
}

impl SubjectService {
    #[must_use]
    pub fn new(subjects: Arc<dyn SubjectRepository>) -> Self {
        Self { subjects }
    }

    /// # Errors
    ///
    /// Returns `SubjectServiceError::Draft` for missing fields.
    /// Returns `SubjectServiceError::Storage` if persistence fails.
    pub async fn create_subject(&self, draft: SubjectDraft) -> Result<SubjectId, SubjectServiceError> {
        let new = draft.validate()?;
        let id = self.subjects.insert_subject(new).await?;
        tracing::info!(%id, "subject created");
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns `SubjectServiceError::Storage` if repository access fails.
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, SubjectServiceError> {
        Ok(self.subjects.list_subjects().await?)
    }

    /// # Errors
    ///
    /// Returns `SubjectServiceError::Storage` if repository access fails.
    pub async fn delete_subject(&self, id: SubjectId) -> Result<(), SubjectServiceError> {
        self.subjects.delete_subject(id).await?;
        tracing::info!(%id, "subject deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use storage::repository::InMemoryRepository;

    #[tokio::test]
    async fn created_subject_is_listed_in_order() {
        let service = SubjectService::new(Arc::new(InMemoryRepository::new()));
        for topic in ["Paging", "Deadlocks"] {
            service
                .create_subject(SubjectDraft {
                    subject: Some("OS".into()),
                    topic: Some(topic.into()),
                    status: Some("Pending".into()),
                })
                .await
                .unwrap();
        }

        let topics: Vec<_> = service
            .list_subjects()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.topic)
            .collect();
        assert_eq!(topics, ["Paging", "Deadlocks"]);
    }

    #[tokio::test]
    async fn missing_subject_is_rejected() {
        let service = SubjectService::new(Arc::new(InMemoryRepository::new()));
        let result = service.create_subject(SubjectDraft::default()).await;
        assert!(matches!(result, Err(SubjectServiceError::Draft(_))));
    }
}
