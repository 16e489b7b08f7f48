use crate::common::{create_http_client, create_test_client};
use educa_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;
use std::collections::BTreeMap;

fn query(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded((*k).into(), (*v).into()))
            .collect(),
    )
}

#[tokio::test]
async fn test_admin_search_user_encodes_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/admins.php")
        .match_query(query(&[("accion", "buscar_usuario"), ("query", "josé & co")]))
        .with_status(200)
        .with_body(r#"[{"id": 4, "nombre": "José"}]"#)
        .create_async()
        .await;

    let client = create_test_client(&create_http_client(&server.url()));
    let result = client.search_user("josé & co").await.unwrap();

    assert_eq!(result, json!([{"id": 4, "nombre": "José"}]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_admin_view_courses_skips_blank_filters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/admins.php")
        .match_query(Matcher::Exact("accion=visualizar_cursos&grado=2".to_string()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = create_test_client(&create_http_client(&server.url()));
    let result = client.view_courses(Some("2"), Some(" ")).await.unwrap();

    assert_eq!(result, json!([]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_admin_configuration_lookups() {
    let mut server = Server::new_async().await;
    let by_user = server
        .mock("GET", "/admins.php")
        .match_query(query(&[("accion", "get_configuracion"), ("usuario_id", "9")]))
        .with_status(200)
        .with_body(r#"{"rol": "alumno", "grado": "3", "seccion": "B"}"#)
        .create_async()
        .await;
    let by_course = server
        .mock("GET", "/admins.php")
        .match_query(query(&[("accion", "get_configuracion"), ("curso_id", "2")]))
        .with_status(200)
        .with_body(r#"[{"grado": "1", "seccion": "A"}]"#)
        .create_async()
        .await;

    let client = create_test_client(&create_http_client(&server.url()));
    let user = client.get_user_configuration(9).await.unwrap();
    let course = client.list_course_configuration(2).await.unwrap();

    assert_eq!(user["seccion"], "B");
    assert_eq!(course[0]["grado"], "1");
    by_user.assert_async().await;
    by_course.assert_async().await;
}

#[tokio::test]
async fn test_admin_posts_tagged_bodies() {
    let mut server = Server::new_async().await;
    let create_course = server
        .mock("POST", "/admins.php")
        .match_body(Matcher::Json(json!({
            "accion": "crear_curso", "nombre": "Arte", "descripcion": "Dibujo"
        })))
        .with_status(200)
        .with_body(r#"{"success": true, "id": 31}"#)
        .create_async()
        .await;
    let configure_course = server
        .mock("POST", "/admins.php")
        .match_body(Matcher::Json(json!({
            "accion": "configurar_curso", "curso_id": 31, "grados": ["1"],
            "secciones": {"1": ["A"]}
        })))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;
    let configure_user = server
        .mock("POST", "/admins.php")
        .match_body(Matcher::Json(json!({
            "accion": "configurar_usuario", "usuario_id": 5, "rol": "alumno",
            "grado": "1", "seccion": "A"
        })))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let client = create_test_client(&create_http_client(&server.url()));
    let created = client
        .create_course(&CreateCourseRequest {
            nombre: "Arte".to_string(),
            descripcion: "Dibujo".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created["id"], 31);

    let mut secciones = BTreeMap::new();
    secciones.insert("1".to_string(), vec!["A".to_string()]);
    client
        .configure_course(&ConfigureCourseRequest {
            curso_id: 31,
            grados: vec!["1".to_string()],
            secciones,
        })
        .await
        .unwrap();
    client
        .configure_user(&ConfigureUserRequest::student(5, "1", "A"))
        .await
        .unwrap();

    create_course.assert_async().await;
    configure_course.assert_async().await;
    configure_user.assert_async().await;
}

#[tokio::test]
async fn test_docente_topics() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/docentes.php")
        .match_body(Matcher::Json(json!({
            "accion": "crear_tema", "curso_id": 11, "titulo": "Fracciones", "descripcion": ""
        })))
        .with_status(200)
        .with_body(r#"{"success": true, "id": 70}"#)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/docentes.php")
        .match_query(query(&[("accion", "listar_temas"), ("cgs_id", "11")]))
        .with_status(200)
        .with_body(r#"[{"id": 70, "titulo": "Fracciones", "estado": "abierto"}]"#)
        .create_async()
        .await;
    let sections = server
        .mock("GET", "/docentes.php")
        .match_query(query(&[("accion", "listar_grados_secciones"), ("curso_id", "3")]))
        .with_status(200)
        .with_body(r#"[{"id": 11, "grado": "1", "seccion": "A"}]"#)
        .create_async()
        .await;

    let client = create_test_client(&create_http_client(&server.url()));
    client
        .create_topic(&CreateTopicRequest {
            curso_id: 11,
            titulo: "Fracciones".to_string(),
            descripcion: String::new(),
        })
        .await
        .unwrap();
    let topics = client.list_teacher_topics(11).await.unwrap();
    let grade_sections = client.list_grade_sections(3).await.unwrap();

    assert_eq!(topics[0]["id"], 70);
    assert_eq!(grade_sections[0]["seccion"], "A");
    create.assert_async().await;
    list.assert_async().await;
    sections.assert_async().await;
}

#[tokio::test]
async fn test_alumno_flow() {
    let mut server = Server::new_async().await;
    let grades = server
        .mock("GET", "/alumnos.php")
        .match_query(query(&[
            ("accion", "listar_temas_calificaciones"),
            ("alumno_id", "3"),
            ("curso_grado_id", "8"),
        ]))
        .with_status(200)
        .with_body(r#"[{"tema": "Fracciones", "calificacion": "A"}]"#)
        .create_async()
        .await;
    let submit = server
        .mock("POST", "/alumnos.php")
        .match_body(Matcher::Json(json!({
            "accion": "guardar_entrega", "actividad_id": 40, "contenido": "Mi ensayo"
        })))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;
    let detail = server
        .mock("GET", "/alumnos.php")
        .match_query(query(&[("accion", "detalle_actividad"), ("id", "40")]))
        .with_status(200)
        .with_body(r#"{"id": 40, "fecha_limite": "2099-01-01 00:00"}"#)
        .create_async()
        .await;

    let client = create_test_client(&create_http_client(&server.url()));
    let rows = client.list_topics_with_grades(3, 8).await.unwrap();
    assert_eq!(rows[0]["calificacion"], "A");

    let activity = client.activity_detail(40).await.unwrap();
    assert!(is_open(activity["fecha_limite"].as_str()));
    client.save_submission(40, "Mi ensayo").await.unwrap();

    grades.assert_async().await;
    submit.assert_async().await;
    detail.assert_async().await;
}

#[tokio::test]
async fn test_tema_criteria_round_trip() {
    let mut server = Server::new_async().await;
    let save = server
        .mock("POST", "/temas.php")
        .match_body(Matcher::Json(json!({
            "accion": "guardar_criterios",
            "tema_id": 70,
            "criterios": [
                {"tipo": "escrita", "titulo": "Ensayo", "descripcion": "",
                 "requiere_entrega": true, "fecha_limite": "2000-01-01 00:00", "enlace": null}
            ]
        })))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/temas.php")
        .match_query(query(&[("accion", "listar_criterios"), ("tema_id", "70")]))
        .with_status(200)
        .with_body(
            r#"[{"tipo": "escrita", "titulo": "Ensayo", "descripcion": "", "requiere_entrega": "1", "fecha_limite": "2000-01-01 00:00", "enlace": ""}]"#,
        )
        .create_async()
        .await;

    let client = create_test_client(&create_http_client(&server.url()));
    let criterion =
        Criterion::new(CriterionType::Escrita, "Ensayo", "").with_deadline("2000-01-01 00:00");
    client.save_criteria(70, vec![criterion.clone()]).await.unwrap();

    let criteria = client.list_criteria(70).await.unwrap();
    assert_eq!(criteria, vec![criterion]);
    assert!(criteria[0].has_expired());
    save.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn test_tema_written_criterion_without_submission() {
    let mut server = Server::new_async().await;
    let save = server
        .mock("POST", "/temas.php")
        .match_body(Matcher::Json(json!({
            "accion": "guardar_criterios",
            "tema_id": 71,
            "criterios": [
                {"tipo": "escrita", "titulo": "Resumen", "descripcion": "En clase",
                 "requiere_entrega": false, "fecha_limite": null, "enlace": null},
                {"tipo": "participacion", "titulo": "Debate", "descripcion": ""}
            ]
        })))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let client = create_test_client(&create_http_client(&server.url()));
    let criteria = vec![
        Criterion::new(CriterionType::Escrita, "Resumen", "En clase"),
        Criterion::new(CriterionType::Participacion, "Debate", ""),
    ];
    client.save_criteria(71, criteria).await.unwrap();

    save.assert_async().await;
}

#[tokio::test]
async fn test_tema_empty_criteria() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/temas.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = create_test_client(&create_http_client(&server.url()));
    assert!(client.list_criteria(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_tema_grading_and_editing() {
    let mut server = Server::new_async().await;
    let grade = server
        .mock("POST", "/temas.php")
        .match_body(Matcher::Json(json!({
            "accion": "editar_entrega", "entrega_id": 15, "calificacion": "B",
            "comentario_docente": "Revisa la conclusión"
        })))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;
    let edit = server
        .mock("POST", "/temas.php")
        .match_body(Matcher::Json(json!({
            "accion": "editar_tema", "id": 70, "titulo": "Fracciones II",
            "descripcion": "", "estado": "cerrado"
        })))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;
    let generate = server
        .mock("POST", "/temas.php")
        .match_body(Matcher::Json(json!({"accion": "generar_lista", "tema_id": 70})))
        .with_status(200)
        .with_body(r#"{"success": true, "generadas": 28}"#)
        .create_async()
        .await;

    let client = create_test_client(&create_http_client(&server.url()));
    client
        .grade_submission(&GradeSubmissionRequest {
            entrega_id: 15,
            calificacion: Grade::InProgress,
            comentario_docente: "Revisa la conclusión".to_string(),
        })
        .await
        .unwrap();
    client
        .edit_topic(&EditTopicRequest {
            id: 70,
            titulo: "Fracciones II".to_string(),
            descripcion: String::new(),
            estado: TopicState::Cerrado,
        })
        .await
        .unwrap();
    let generated = client.generate_list(70).await.unwrap();

    assert_eq!(generated["generadas"], 28);
    grade.assert_async().await;
    edit.assert_async().await;
    generate.assert_async().await;
}
