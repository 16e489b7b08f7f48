use crate::error::AppError;
use crate::model::requests::{EditTopicRequest, GradeSubmissionRequest};
use crate::model::responses::Criterion;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for topic, criteria and submission endpoints
#[async_trait]
pub trait TemaService: Send + Sync {
    /// Gets a topic
    async fn topic_detail(&self, id: i64) -> Result<Value, AppError>;

    /// Lists the evaluation criteria of a topic
    async fn list_criteria(&self, tema_id: i64) -> Result<Vec<Criterion>, AppError>;

    /// Lists the students of a topic with their submissions
    async fn list_students_with_submissions(&self, tema_id: i64) -> Result<Value, AppError>;

    /// Gets a submission
    async fn submission_detail(&self, id: i64) -> Result<Value, AppError>;

    /// Grades a submission
    async fn grade_submission(&self, request: &GradeSubmissionRequest)
    -> Result<Value, AppError>;

    /// Updates a topic
    async fn edit_topic(&self, request: &EditTopicRequest) -> Result<Value, AppError>;

    /// Generates the per-student activity list of a topic
    async fn generate_list(&self, tema_id: i64) -> Result<Value, AppError>;

    /// Replaces the evaluation criteria of a topic
    async fn save_criteria(&self, tema_id: i64, criterios: Vec<Criterion>)
    -> Result<Value, AppError>;
}
