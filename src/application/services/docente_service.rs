use crate::application::client::Client;
use crate::application::interfaces::docente::DocenteService;
use crate::constants::DOCENTES_PATH;
use crate::error::AppError;
use crate::model::requests::{AccionRequest, CreateTopicRequest};
use crate::model::utils::accion_path;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl DocenteService for Client {
    async fn list_teacher_courses(&self) -> Result<Value, AppError> {
        info!("Listing teacher courses");
        let path = accion_path(DOCENTES_PATH, "listar_cursos", &[]);
        self.http().get_as(&path).await
    }

    async fn create_topic(&self, request: &CreateTopicRequest) -> Result<Value, AppError> {
        info!("Creating topic {} in {}", request.titulo, request.curso_id);
        let body = AccionRequest::new("crear_tema", request);
        self.http().post_as(DOCENTES_PATH, &body).await
    }

    async fn list_teacher_topics(&self, cgs_id: i64) -> Result<Value, AppError> {
        let id = cgs_id.to_string();
        let path = accion_path(DOCENTES_PATH, "listar_temas", &[("cgs_id", Some(id.as_str()))]);
        let result: Value = self.http().get_as(&path).await?;
        debug!(
            "Topics obtained: {}",
            result.as_array().map_or(0, Vec::len)
        );
        Ok(result)
    }

    async fn list_grade_sections(&self, curso_id: i64) -> Result<Value, AppError> {
        let id = curso_id.to_string();
        let path = accion_path(
            DOCENTES_PATH,
            "listar_grados_secciones",
            &[("curso_id", Some(id.as_str()))],
        );
        self.http().get_as(&path).await
    }
}
