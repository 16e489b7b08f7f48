use crate::error::AppError;
use crate::model::requests::{
    ConfigureCourseRequest, ConfigureUserRequest, CreateCourseRequest, CreateUserRequest,
};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the admin endpoints
#[async_trait]
pub trait AdminService: Send + Sync {
    /// Lists every course
    async fn list_all_courses(&self) -> Result<Value, AppError>;

    /// Creates a user account
    async fn create_user(&self, request: &CreateUserRequest) -> Result<Value, AppError>;

    /// Creates a course
    async fn create_course(&self, request: &CreateCourseRequest) -> Result<Value, AppError>;

    /// Searches users by name or email
    ///
    /// # Arguments
    /// * `query` - Free text, sent URL-encoded
    async fn search_user(&self, query: &str) -> Result<Value, AppError>;

    /// Gets the role configuration of a user
    async fn get_user_configuration(&self, usuario_id: i64) -> Result<Value, AppError>;

    /// Gets the grades and sections a course is configured for
    async fn list_course_configuration(&self, curso_id: i64) -> Result<Value, AppError>;

    /// Saves the role configuration of a user
    async fn configure_user(&self, request: &ConfigureUserRequest) -> Result<Value, AppError>;

    /// Saves the grades and sections of a course
    async fn configure_course(&self, request: &ConfigureCourseRequest)
    -> Result<Value, AppError>;

    /// Lists courses, optionally filtered by grade and section
    ///
    /// Blank filters are left out of the query.
    async fn view_courses(
        &self,
        grado: Option<&str>,
        seccion: Option<&str>,
    ) -> Result<Value, AppError>;
}
