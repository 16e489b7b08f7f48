use educa_client::model::responses::{
    ApiPayload, Criterion, CriterionType, Grade, Role, TopicState, UserSession, initial_route,
};
use educa_client::model::utils::accion_path;
use serde_json::json;

#[test]
fn test_user_session_from_login_response() {
    let session: UserSession = serde_json::from_value(json!({
        "id": 3,
        "nombre": "Luis Quispe",
        "email": "luis@colegio.pe",
        "rol": "alumno"
    }))
    .unwrap();
    assert_eq!(session.rol, Role::Alumno);
    assert_eq!(session.home_route(), "AlumnoHome");
    assert_eq!(initial_route(Some(&session)), "AlumnoHome");
    assert!(session.extra.is_empty());
}

#[test]
fn test_user_session_rejects_bad_id() {
    let result = serde_json::from_value::<UserSession>(json!({"id": "abc", "rol": "admin"}));
    assert!(result.is_err());
}

#[test]
fn test_role_round_trip_keeps_unknown_names() {
    let role: Role = serde_json::from_value(json!("director")).unwrap();
    assert_eq!(role, Role::Other("director".to_string()));
    assert_eq!(serde_json::to_value(&role).unwrap(), json!("director"));
    assert_eq!(Role::Admin.home_route(), "AdminHome");
    assert_eq!(Role::Docente.to_string(), "docente");
}

#[test]
fn test_grade_scale() {
    let grades: Vec<Grade> = serde_json::from_value(json!(["AD", "A", "B", "C"])).unwrap();
    assert_eq!(
        grades,
        vec![Grade::Outstanding, Grade::Achieved, Grade::InProgress, Grade::Beginning]
    );
    assert!(serde_json::from_value::<Grade>(json!("D")).is_err());
}

#[test]
fn test_topic_state_default() {
    assert_eq!(TopicState::default(), TopicState::Abierto);
    assert_eq!(
        serde_json::from_value::<TopicState>(json!("cerrado")).unwrap(),
        TopicState::Cerrado
    );
}

#[test]
fn test_criteria_list_from_backend() {
    let payload = ApiPayload::Json(json!([
        {"tipo": "escrita", "titulo": "Ensayo", "requiere_entrega": 1, "fecha_limite": "2099-01-01 00:00"},
        {"tipo": "exposicion", "titulo": "Expo", "requiere_entrega": "0", "fecha_limite": null},
        {"tipo": "evaluacion", "titulo": "Examen", "fecha_limite": ""}
    ]));
    let criteria: Vec<Criterion> = payload.into_typed().unwrap();
    assert_eq!(criteria.len(), 3);
    assert!(criteria[0].requiere_entrega);
    assert!(criteria[0].is_open());
    assert!(!criteria[1].requiere_entrega);
    assert_eq!(criteria[1].fecha_limite, None);
    assert_eq!(criteria[2].tipo, CriterionType::Evaluacion);
    assert!(!criteria[2].has_expired());
}

#[test]
fn test_accion_path_skips_missing_params() {
    assert_eq!(
        accion_path("/admins.php", "visualizar_cursos", &[("grado", Some("3")), ("seccion", None)]),
        "/admins.php?accion=visualizar_cursos&grado=3"
    );
    assert_eq!(
        accion_path("/docentes.php", "listar_cursos", &[]),
        "/docentes.php?accion=listar_cursos"
    );
}
