/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::http::HttpClient;
use std::sync::Arc;

/// Client for the Educa API
///
/// Every role service ([`AdminService`](crate::application::interfaces::admin::AdminService),
/// [`DocenteService`](crate::application::interfaces::docente::DocenteService),
/// [`AlumnoService`](crate::application::interfaces::alumno::AlumnoService),
/// [`TemaService`](crate::application::interfaces::tema::TemaService)) is implemented on it.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client with its own request client
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client on a shared request client
    ///
    /// Use this when the session expiry handler is registered on `http_client`.
    #[must_use]
    pub fn from_http(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// The underlying request client
    #[must_use]
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http_client
    }
}
