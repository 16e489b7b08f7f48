use crate::application::client::Client;
use crate::application::interfaces::alumno::AlumnoService;
use crate::constants::ALUMNOS_PATH;
use crate::error::AppError;
use crate::model::requests::{AccionRequest, SaveSubmissionRequest};
use crate::model::utils::accion_path;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl AlumnoService for Client {
    async fn list_course_topics(&self, curso_id: i64) -> Result<Value, AppError> {
        let id = curso_id.to_string();
        let path = accion_path(ALUMNOS_PATH, "listar_temas", &[("curso_id", Some(id.as_str()))]);
        self.http().get_as(&path).await
    }

    async fn activity_detail(&self, id: i64) -> Result<Value, AppError> {
        debug!("Getting activity {}", id);
        let id = id.to_string();
        let path = accion_path(ALUMNOS_PATH, "detalle_actividad", &[("id", Some(id.as_str()))]);
        self.http().get_as(&path).await
    }

    async fn save_submission(
        &self,
        actividad_id: i64,
        contenido: &str,
    ) -> Result<Value, AppError> {
        info!("Saving submission for activity {}", actividad_id);
        let body = AccionRequest::new(
            "guardar_entrega",
            SaveSubmissionRequest {
                actividad_id,
                contenido: contenido.to_string(),
            },
        );
        self.http().post_as(ALUMNOS_PATH, &body).await
    }

    async fn list_student_grade_section(&self, alumno_id: i64) -> Result<Value, AppError> {
        let id = alumno_id.to_string();
        let path = accion_path(
            ALUMNOS_PATH,
            "listar_grado_seccion",
            &[("alumno_id", Some(id.as_str()))],
        );
        self.http().get_as(&path).await
    }

    async fn list_student_courses(&self, alumno_id: i64) -> Result<Value, AppError> {
        let id = alumno_id.to_string();
        let path = accion_path(ALUMNOS_PATH, "listar_cursos", &[("alumno_id", Some(id.as_str()))]);
        self.http().get_as(&path).await
    }

    async fn list_topics_with_grades(
        &self,
        alumno_id: i64,
        curso_grado_id: i64,
    ) -> Result<Value, AppError> {
        let alumno = alumno_id.to_string();
        let curso_grado = curso_grado_id.to_string();
        let path = accion_path(
            ALUMNOS_PATH,
            "listar_temas_calificaciones",
            &[
                ("alumno_id", Some(alumno.as_str())),
                ("curso_grado_id", Some(curso_grado.as_str())),
            ],
        );
        self.http().get_as(&path).await
    }
}
