use crate::application::client::Client;
use crate::application::interfaces::tema::TemaService;
use crate::constants::TEMAS_PATH;
use crate::error::AppError;
use crate::model::requests::{
    AccionRequest, EditTopicRequest, GenerateListRequest, GradeSubmissionRequest,
    SaveCriteriaRequest,
};
use crate::model::responses::Criterion;
use crate::model::utils::accion_path;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl TemaService for Client {
    async fn topic_detail(&self, id: i64) -> Result<Value, AppError> {
        let id = id.to_string();
        let path = accion_path(TEMAS_PATH, "detalle_tema", &[("id", Some(id.as_str()))]);
        self.http().get_as(&path).await
    }

    async fn list_criteria(&self, tema_id: i64) -> Result<Vec<Criterion>, AppError> {
        let id = tema_id.to_string();
        let path = accion_path(TEMAS_PATH, "listar_criterios", &[("tema_id", Some(id.as_str()))]);
        // an empty body means no criteria yet
        let result: Option<Vec<Criterion>> = self.http().get_as(&path).await?;
        let criteria = result.unwrap_or_default();
        debug!("Criteria obtained for topic {}: {}", tema_id, criteria.len());
        Ok(criteria)
    }

    async fn list_students_with_submissions(&self, tema_id: i64) -> Result<Value, AppError> {
        let id = tema_id.to_string();
        let path = accion_path(TEMAS_PATH, "listar_alumnos", &[("tema_id", Some(id.as_str()))]);
        self.http().get_as(&path).await
    }

    async fn submission_detail(&self, id: i64) -> Result<Value, AppError> {
        let id = id.to_string();
        let path = accion_path(TEMAS_PATH, "detalle_entrega", &[("id", Some(id.as_str()))]);
        self.http().get_as(&path).await
    }

    async fn grade_submission(
        &self,
        request: &GradeSubmissionRequest,
    ) -> Result<Value, AppError> {
        info!(
            "Grading submission {} with {}",
            request.entrega_id, request.calificacion
        );
        let body = AccionRequest::new("editar_entrega", request);
        self.http().post_as(TEMAS_PATH, &body).await
    }

    async fn edit_topic(&self, request: &EditTopicRequest) -> Result<Value, AppError> {
        info!("Editing topic {}", request.id);
        let body = AccionRequest::new("editar_tema", request);
        self.http().post_as(TEMAS_PATH, &body).await
    }

    async fn generate_list(&self, tema_id: i64) -> Result<Value, AppError> {
        info!("Generating activity list for topic {}", tema_id);
        let body = AccionRequest::new("generar_lista", GenerateListRequest { tema_id });
        self.http().post_as(TEMAS_PATH, &body).await
    }

    async fn save_criteria(
        &self,
        tema_id: i64,
        criterios: Vec<Criterion>,
    ) -> Result<Value, AppError> {
        info!("Saving {} criteria for topic {}", criterios.len(), tema_id);
        let body = AccionRequest::new("guardar_criterios", SaveCriteriaRequest { tema_id, criterios });
        self.http().post_as(TEMAS_PATH, &body).await
    }
}
