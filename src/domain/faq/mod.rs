// src/domain/faq/mod.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

uuid_id!(FaqId);

#[derive(Debug, Clone)]
pub struct Faq {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Question/answer pair; both halves are required on create and on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqContent {
    question: String,
    answer: String,
}

impl FaqContent {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> DomainResult<Self> {
        let question = question.into();
        let answer = answer.into();
        if question.trim().is_empty() || answer.trim().is_empty() {
            return Err(DomainError::Validation(
                "question and answer are required".into(),
            ));
        }
        Ok(Self { question, answer })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

#[async_trait]
pub trait FaqRepository: Send + Sync {
    async fn insert(&self, content: FaqContent, now: DateTime<Utc>) -> DomainResult<Faq>;
    async fn update(&self, id: FaqId, content: FaqContent, now: DateTime<Utc>)
    -> DomainResult<Faq>;
    async fn delete(&self, id: FaqId) -> DomainResult<()>;
    async fn find_by_id(&self, id: FaqId) -> DomainResult<Option<Faq>>;
    /// Newest first.
    async fn list(&self) -> DomainResult<Vec<Faq>>;
}
