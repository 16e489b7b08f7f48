/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/25
******************************************************************************/
use crate::error::AppError;
use crate::model::utils::{empty_string_as_none, lenient_bool, lenient_i64};
use crate::utils::lima_time;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Successful response body
///
/// The backend is not strict about framing, so anything that does not parse as
/// JSON is kept as text.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    /// Body parsed as JSON (`null` for an empty body)
    Json(Value),
    /// Body that is not JSON
    Text(String),
}

impl ApiPayload {
    /// The JSON value, if the body was JSON
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiPayload::Json(value) => Some(value),
            ApiPayload::Text(_) => None,
        }
    }

    /// Converts into a JSON value, turning text into a JSON string
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            ApiPayload::Json(value) => value,
            ApiPayload::Text(text) => Value::String(text),
        }
    }

    /// Deserializes the payload into `T`
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, AppError> {
        Ok(serde_json::from_value(self.into_value())?)
    }
}

/// Role of an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// School administrator
    Admin,
    /// Teacher
    Docente,
    /// Student
    Alumno,
    /// Any role this client does not know about
    Other(String),
}

impl Role {
    /// Name of the landing screen for this role
    #[must_use]
    pub fn home_route(&self) -> &'static str {
        match self {
            Role::Admin => "AdminHome",
            Role::Docente => "DocenteHome",
            Role::Alumno | Role::Other(_) => "AlumnoHome",
        }
    }

    /// Wire name of the role
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Docente => "docente",
            Role::Alumno => "alumno",
            Role::Other(other) => other,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "docente" => Role::Docente,
            "alumno" => Role::Alumno,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Screen to open at start: the role's home, or the login screen when logged out
#[must_use]
pub fn initial_route(session: Option<&UserSession>) -> &'static str {
    session.map_or("Login", |s| s.rol.home_route())
}

/// Logged-in user record returned by `logins.php`
///
/// Fields the client does not model are kept in `extra` so the record can be
/// persisted and restored without loss.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// User id
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    /// Display name
    #[serde(default)]
    pub nombre: String,
    /// Login email
    #[serde(default)]
    pub email: String,
    /// Role
    pub rol: Role,
    /// Any other field sent by the backend
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserSession {
    /// Landing screen for this user
    #[must_use]
    pub fn home_route(&self) -> &'static str {
        self.rol.home_route()
    }
}

/// Grade on the Peruvian achievement scale
#[derive(Debug, Clone, Copy, DisplaySimple, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// Logro destacado
    #[serde(rename = "AD")]
    Outstanding,
    /// Logro esperado
    #[serde(rename = "A")]
    Achieved,
    /// En proceso
    #[serde(rename = "B")]
    InProgress,
    /// En inicio
    #[serde(rename = "C")]
    Beginning,
}

/// Whether a topic accepts work
#[derive(Debug, Clone, Copy, DisplaySimple, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicState {
    /// Active
    #[default]
    Abierto,
    /// Closed
    Cerrado,
}

/// Evaluation type of a criterion
#[derive(Debug, Clone, Copy, DisplaySimple, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Written work, the only type that may require a submission
    Escrita,
    /// Oral presentation
    Exposicion,
    /// Class participation
    Participacion,
    /// Exam
    Evaluacion,
}

/// Evaluation criterion of a topic
///
/// `escrita` rows always carry `requiere_entrega`, `fecha_limite` and `enlace`
/// on the wire, with `null` for an absent deadline or link. Other types only
/// send the fields that are set.
#[derive(Debug, Clone, DisplaySimple, PartialEq, Deserialize)]
pub struct Criterion {
    /// Evaluation type
    pub tipo: CriterionType,
    /// Title
    #[serde(default)]
    pub titulo: String,
    /// Description
    #[serde(default)]
    pub descripcion: String,
    /// Whether students must upload a submission
    #[serde(default, deserialize_with = "lenient_bool")]
    pub requiere_entrega: bool,
    /// Submission deadline, Lima time
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub fecha_limite: Option<String>,
    /// Reference link
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub enlace: Option<String>,
}

impl Serialize for Criterion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let full = self.tipo == CriterionType::Escrita;
        let len = if full {
            6
        } else {
            3 + usize::from(self.requiere_entrega)
                + usize::from(self.fecha_limite.is_some())
                + usize::from(self.enlace.is_some())
        };
        let mut state = serializer.serialize_struct("Criterion", len)?;
        state.serialize_field("tipo", &self.tipo)?;
        state.serialize_field("titulo", &self.titulo)?;
        state.serialize_field("descripcion", &self.descripcion)?;
        if full || self.requiere_entrega {
            state.serialize_field("requiere_entrega", &self.requiere_entrega)?;
        }
        if full || self.fecha_limite.is_some() {
            state.serialize_field("fecha_limite", &self.fecha_limite)?;
        }
        if full || self.enlace.is_some() {
            state.serialize_field("enlace", &self.enlace)?;
        }
        state.end()
    }
}

impl Criterion {
    /// A criterion with only type, title and description
    #[must_use]
    pub fn new(tipo: CriterionType, titulo: &str, descripcion: &str) -> Self {
        Self {
            tipo,
            titulo: titulo.to_string(),
            descripcion: descripcion.to_string(),
            requiere_entrega: false,
            fecha_limite: None,
            enlace: None,
        }
    }

    /// Sets the submission deadline and marks a submission as required
    #[must_use]
    pub fn with_deadline(mut self, fecha_limite: &str) -> Self {
        self.requiere_entrega = true;
        self.fecha_limite = Some(fecha_limite.to_string());
        self
    }

    /// Sets the reference link
    #[must_use]
    pub fn with_link(mut self, enlace: &str) -> Self {
        self.enlace = Some(enlace.to_string());
        self
    }

    /// Whether submissions are still accepted
    #[must_use]
    pub fn is_open(&self) -> bool {
        lima_time::is_open(self.fecha_limite.as_deref())
    }

    /// Whether the deadline has passed
    #[must_use]
    pub fn has_expired(&self) -> bool {
        lima_time::has_expired(self.fecha_limite.as_deref())
    }
}
