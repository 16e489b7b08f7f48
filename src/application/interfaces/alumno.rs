use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the student endpoints
#[async_trait]
pub trait AlumnoService: Send + Sync {
    /// Lists the topics of a course
    async fn list_course_topics(&self, curso_id: i64) -> Result<Value, AppError>;

    /// Gets an activity with its criterion and the student's submission
    async fn activity_detail(&self, id: i64) -> Result<Value, AppError>;

    /// Saves the student's submission for an activity
    ///
    /// Deadlines are not checked here; see [`crate::utils::is_open`].
    async fn save_submission(&self, actividad_id: i64, contenido: &str)
    -> Result<Value, AppError>;

    /// Gets the grade and section of a student
    async fn list_student_grade_section(&self, alumno_id: i64) -> Result<Value, AppError>;

    /// Lists the courses of a student
    async fn list_student_courses(&self, alumno_id: i64) -> Result<Value, AppError>;

    /// Lists the topics of a course with the student's grades
    ///
    /// # Arguments
    /// * `alumno_id` - Student id
    /// * `curso_grado_id` - Course-grade id
    async fn list_topics_with_grades(
        &self,
        alumno_id: i64,
        curso_grado_id: i64,
    ) -> Result<Value, AppError>;
}
