/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/25
******************************************************************************/
use crate::constants::MISSING_CREDENTIALS_MESSAGE;
use crate::error::AppError;
use crate::model::responses::{Criterion, Grade, Role, TopicState};
use pretty_simple_display::DisplaySimple;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Body of an outgoing request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Structured value, serialized to JSON before sending
    Json(Value),
    /// Raw text, sent unmodified
    Text(String),
}

impl RequestBody {
    /// Builds a structured body from any serializable value
    pub fn json<T: Serialize>(value: &T) -> Result<Self, AppError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// The exact text put on the wire
    pub fn encode(&self) -> Result<String, AppError> {
        match self {
            RequestBody::Json(value) => Ok(serde_json::to_string(value)?),
            RequestBody::Text(text) => Ok(text.clone()),
        }
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        RequestBody::Json(value)
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Text(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        RequestBody::Text(text.to_string())
    }
}

/// Method, headers and body of a request; the path is passed separately
///
/// Defaults to a bodiless GET. Headers given here are merged over the default
/// `Content-Type: application/json`.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method
    pub method: Method,
    /// Extra headers, applied in order
    pub headers: Vec<(String, String)>,
    /// Optional body
    pub body: Option<RequestBody>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    /// A bodiless GET
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A POST carrying `body`
    #[must_use]
    pub fn post(body: impl Into<RequestBody>) -> Self {
        Self::new().with_method(Method::POST).with_body(body)
    }

    /// Set the method
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// POST body tagged with the backend operation it targets
///
/// Serializes as the payload's fields plus `"accion": <name>`.
#[derive(Debug, Clone, Serialize)]
pub struct AccionRequest<T: Serialize> {
    /// Backend operation discriminator
    pub accion: &'static str,
    /// Operation fields
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> AccionRequest<T> {
    /// Tags `payload` with `accion`
    pub fn new(accion: &'static str, payload: T) -> Self {
        Self { accion, payload }
    }
}

/// Credentials sent to `logins.php`
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl LoginRequest {
    /// Builds the request, rejecting blank fields
    pub fn new(email: &str, password: &str) -> Result<Self, AppError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::InvalidInput(
                MISSING_CREDENTIALS_MESSAGE.to_string(),
            ));
        }
        Ok(Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        })
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// New account created by an admin
#[derive(Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Full name
    pub nombre: String,
    /// Login email
    pub email: String,
    /// Initial password
    pub password: String,
    /// Role of the new account
    pub rol: Role,
}

impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("nombre", &self.nombre)
            .field("email", &self.email)
            .field("password", &"***")
            .field("rol", &self.rol)
            .finish()
    }
}

/// New course
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    /// Course name
    pub nombre: String,
    /// Course description
    pub descripcion: String,
}

/// Role-specific configuration of a user
///
/// Students carry `grado`/`seccion`; teachers carry the course and the
/// course-grade-section ids they teach.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct ConfigureUserRequest {
    /// User being configured
    pub usuario_id: i64,
    /// Role of the user
    pub rol: Role,
    /// Grade (students)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grado: Option<String>,
    /// Section (students)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seccion: Option<String>,
    /// Course (teachers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curso_id: Option<i64>,
    /// Course-grade-section assignments (teachers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curso_grado_seccion_ids: Option<Vec<i64>>,
}

impl ConfigureUserRequest {
    /// Configuration of a student
    #[must_use]
    pub fn student(usuario_id: i64, grado: &str, seccion: &str) -> Self {
        Self {
            usuario_id,
            rol: Role::Alumno,
            grado: Some(grado.to_string()),
            seccion: Some(seccion.to_string()),
            curso_id: None,
            curso_grado_seccion_ids: None,
        }
    }

    /// Configuration of a teacher
    #[must_use]
    pub fn teacher(usuario_id: i64, curso_id: i64, curso_grado_seccion_ids: Vec<i64>) -> Self {
        Self {
            usuario_id,
            rol: Role::Docente,
            grado: None,
            seccion: None,
            curso_id: Some(curso_id),
            curso_grado_seccion_ids: Some(curso_grado_seccion_ids),
        }
    }
}

/// Grades and sections a course is offered in
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct ConfigureCourseRequest {
    /// Course being configured
    pub curso_id: i64,
    /// Selected grades
    pub grados: Vec<String>,
    /// Sections per selected grade
    pub secciones: BTreeMap<String, Vec<String>>,
}

/// New topic of a course
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct CreateTopicRequest {
    /// Course-grade-section the topic belongs to
    pub curso_id: i64,
    /// Topic title
    pub titulo: String,
    /// Topic description
    pub descripcion: String,
}

/// Edit of an existing topic
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct EditTopicRequest {
    /// Topic id
    pub id: i64,
    /// New title
    pub titulo: String,
    /// New description
    pub descripcion: String,
    /// Open or closed
    pub estado: TopicState,
}

/// Student submission for an activity
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct SaveSubmissionRequest {
    /// Activity being answered
    pub actividad_id: i64,
    /// Submitted content
    pub contenido: String,
}

/// Teacher grading of a submission
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct GradeSubmissionRequest {
    /// Submission id
    pub entrega_id: i64,
    /// Grade on the AD/A/B/C scale
    pub calificacion: Grade,
    /// Teacher feedback
    pub comentario_docente: String,
}

/// Generation of the per-student activity list of a topic
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct GenerateListRequest {
    /// Topic id
    pub tema_id: i64,
}

/// Evaluation criteria of a topic
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize)]
pub struct SaveCriteriaRequest {
    /// Topic id
    pub tema_id: i64,
    /// Criteria, one per evaluation type
    pub criterios: Vec<Criterion>,
}
