use educa_client::constants::SESSION_EXPIRED_MESSAGE;
use educa_client::error::AppError;
use educa_client::model::http::{ResponseOutcome, classify_response, is_auth_error_message};
use educa_client::model::responses::ApiPayload;
use reqwest::StatusCode;
use serde_json::json;

#[test]
fn test_auth_keywords_are_case_insensitive() {
    assert!(is_auth_error_message("SESIÓN EXPIRADA"));
    assert!(is_auth_error_message("Usuario no autenticado"));
    assert!(is_auth_error_message("Acceso No Autorizado"));
    assert!(!is_auth_error_message("Curso no encontrado"));
    // accent matters: the backend always writes "sesión"
    assert!(!is_auth_error_message("sesion"));
}

#[test]
fn test_forbidden_with_plain_text_body() {
    let outcome = classify_response(StatusCode::FORBIDDEN, "<html>denied</html>");
    assert!(outcome.is_session_expired());
    let err = outcome.into_result().unwrap_err();
    assert_eq!(err.to_string(), SESSION_EXPIRED_MESSAGE);
}

#[test]
fn test_domain_error_into_result() {
    let err = classify_response(StatusCode::OK, r#"{"error": "Nombre duplicado"}"#)
        .into_result()
        .unwrap_err();
    assert!(matches!(err, AppError::Domain(ref msg) if msg == "Nombre duplicado"));
    assert!(!err.is_session_expired());
}

#[test]
fn test_error_field_beats_message_on_failure_status() {
    let outcome = classify_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"error": "Falta el título", "message": "Unprocessable"}"#,
    );
    assert_eq!(outcome, ResponseOutcome::Domain("Falta el título".to_string()));
}

#[test]
fn test_null_error_field_is_ignored() {
    let outcome = classify_response(StatusCode::OK, r#"{"error": null, "id": 4}"#);
    assert_eq!(
        outcome,
        ResponseOutcome::Payload(ApiPayload::Json(json!({"error": null, "id": 4})))
    );
}

#[test]
fn test_json_scalar_payloads() {
    assert_eq!(
        classify_response(StatusCode::OK, "true")
            .into_result()
            .unwrap(),
        ApiPayload::Json(json!(true))
    );
    assert_eq!(
        classify_response(StatusCode::CREATED, "42")
            .into_result()
            .unwrap(),
        ApiPayload::Json(json!(42))
    );
}

#[test]
fn test_failure_without_json_keeps_status() {
    let err = classify_response(StatusCode::BAD_GATEWAY, "upstream down")
        .into_result()
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    assert_eq!(err.to_string(), "upstream down");
}
