use crate::application::client::Client;
use crate::application::interfaces::admin::AdminService;
use crate::constants::ADMINS_PATH;
use crate::error::AppError;
use crate::model::requests::{
    AccionRequest, ConfigureCourseRequest, ConfigureUserRequest, CreateCourseRequest,
    CreateUserRequest,
};
use crate::model::utils::accion_path;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl AdminService for Client {
    async fn list_all_courses(&self) -> Result<Value, AppError> {
        info!("Listing all courses");
        let path = accion_path(ADMINS_PATH, "listar_cursos", &[]);
        self.http().get_as(&path).await
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<Value, AppError> {
        info!("Creating user {} ({})", request.email, request.rol);
        let body = AccionRequest::new("crear_usuario", request);
        let result: Value = self.http().post_as(ADMINS_PATH, &body).await?;
        debug!("User created: {}", result);
        Ok(result)
    }

    async fn create_course(&self, request: &CreateCourseRequest) -> Result<Value, AppError> {
        info!("Creating course {}", request.nombre);
        let body = AccionRequest::new("crear_curso", request);
        self.http().post_as(ADMINS_PATH, &body).await
    }

    async fn search_user(&self, query: &str) -> Result<Value, AppError> {
        debug!("Searching users: {}", query);
        let path = accion_path(ADMINS_PATH, "buscar_usuario", &[("query", Some(query))]);
        self.http().get_as(&path).await
    }

    async fn get_user_configuration(&self, usuario_id: i64) -> Result<Value, AppError> {
        let id = usuario_id.to_string();
        let path = accion_path(ADMINS_PATH, "get_configuracion", &[("usuario_id", Some(id.as_str()))]);
        self.http().get_as(&path).await
    }

    async fn list_course_configuration(&self, curso_id: i64) -> Result<Value, AppError> {
        let id = curso_id.to_string();
        let path = accion_path(ADMINS_PATH, "get_configuracion", &[("curso_id", Some(id.as_str()))]);
        self.http().get_as(&path).await
    }

    async fn configure_user(&self, request: &ConfigureUserRequest) -> Result<Value, AppError> {
        info!(
            "Configuring user {} as {}",
            request.usuario_id, request.rol
        );
        let body = AccionRequest::new("configurar_usuario", request);
        self.http().post_as(ADMINS_PATH, &body).await
    }

    async fn configure_course(
        &self,
        request: &ConfigureCourseRequest,
    ) -> Result<Value, AppError> {
        info!(
            "Configuring course {} for {} grades",
            request.curso_id,
            request.grados.len()
        );
        let body = AccionRequest::new("configurar_curso", request);
        self.http().post_as(ADMINS_PATH, &body).await
    }

    async fn view_courses(
        &self,
        grado: Option<&str>,
        seccion: Option<&str>,
    ) -> Result<Value, AppError> {
        let grado = grado.filter(|g| !g.trim().is_empty());
        let seccion = seccion.filter(|s| !s.trim().is_empty());
        let path = accion_path(
            ADMINS_PATH,
            "visualizar_cursos",
            &[("grado", grado), ("seccion", seccion)],
        );
        self.http().get_as(&path).await
    }
}
