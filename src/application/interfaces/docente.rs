use crate::error::AppError;
use crate::model::requests::CreateTopicRequest;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the teacher endpoints
#[async_trait]
pub trait DocenteService: Send + Sync {
    /// Lists the courses assigned to the logged-in teacher
    async fn list_teacher_courses(&self) -> Result<Value, AppError>;

    /// Creates a topic in a course-grade-section
    async fn create_topic(&self, request: &CreateTopicRequest) -> Result<Value, AppError>;

    /// Lists the topics of a course-grade-section
    ///
    /// # Arguments
    /// * `cgs_id` - Course-grade-section id
    async fn list_teacher_topics(&self, cgs_id: i64) -> Result<Value, AppError>;

    /// Lists the grades and sections where the teacher teaches a course
    async fn list_grade_sections(&self, curso_id: i64) -> Result<Value, AppError>;
}
