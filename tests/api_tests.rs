mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use trabunda_backend::utils::jwt::{JwtClaims, JwtCodec};

use common::{get, offline_app, post_json, send, token_for, SECRET};

#[tokio::test]
async fn test_health_check() {
    let app = offline_app(&[]);
    let (status, body) = send(&app, get("/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_areas_rejects_unknown_tipo() {
    let app = offline_app(&[]);
    let (status, body) = send(&app, get("/areas?tipo=BAD", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("tipo inválido"));
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = offline_app(&[]);
    let (status, body) = send(
        &app,
        post_json("/auth/register", None, json!({ "username": "ana" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields = body["details"]["fields"].as_array().unwrap();
    assert!(fields.contains(&json!("password")));
    assert!(fields.contains(&json!("nombre")));
}

#[tokio::test]
async fn test_login_missing_password() {
    let app = offline_app(&[]);
    let (status, _) = send(
        &app,
        post_json("/auth/login", None, json!({ "username": "ana" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = offline_app(&[]);
    let request = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ username: "))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_worker_requires_codigo() {
    let app = offline_app(&[]);
    let (status, body) = send(
        &app,
        post_json("/trabajadores", None, json!({ "nombreCompleto": "Luis Quispe" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Falta el campo codigo");
}

#[tokio::test]
async fn test_reportes_requires_token() {
    let app = offline_app(&[]);

    let (status, body) = send(&app, get("/reportes", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let (status, _) = send(&app, post_json("/reportes", None, json!({}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_reportes_rejects_wrong_scheme_and_bad_tokens() {
    let app = offline_app(&[]);
    let token = token_for(1, "ana", &["PLANILLERO"]);

    let request = Request::builder()
        .uri("/reportes")
        .header(header::AUTHORIZATION, format!("Token {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, get("/reportes", Some("no-es-un-token"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let forged = JwtCodec::new("otro-secreto", 3600)
        .generate_token(1, "ana", &["ADMIN".to_string()])
        .unwrap();
    let (status, _) = send(&app, get("/reportes", Some(&forged))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_reportes_rejects_expired_token() {
    let app = offline_app(&[]);
    let now = chrono::Utc::now().timestamp() as usize;
    let expired = JwtCodec::new(SECRET, 3600)
        .sign(&JwtClaims {
            sub: "1".to_string(),
            username: "ana".to_string(),
            roles: vec!["PLANILLERO".to_string()],
            exp: now - 5,
            iat: now - 3605,
        })
        .unwrap();

    let (status, body) = send(&app, get("/reportes", Some(&expired))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token inválido o expirado");
}

#[tokio::test]
async fn test_create_report_rejects_invalid_turno_and_tipo() {
    let app = offline_app(&[]);
    let token = token_for(1, "ana", &["PLANILLERO"]);

    let (status, body) = send(
        &app,
        post_json(
            "/reportes",
            Some(&token),
            json!({
                "fecha": "2025-03-14",
                "turno": "Madrugada",
                "tipoReporte": "APOYO_HORAS",
                "areaId": 1
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "turno no válido");

    let (status, body) = send(
        &app,
        post_json(
            "/reportes",
            Some(&token),
            json!({
                "fecha": "2025-03-14",
                "turno": "Tarde",
                "tipo_reporte": "CONTEO",
                "area_id": 1
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "tipoReporte no válido");
}

#[tokio::test]
async fn test_create_report_rejects_padded_enums() {
    let app = offline_app(&[]);
    let token = token_for(1, "ana", &["PLANILLERO"]);

    for (turno, tipo) in [(" Tarde ", "APOYO_HORAS"), ("Tarde", " APOYO_HORAS ")] {
        let (status, _) = send(
            &app,
            post_json(
                "/reportes",
                Some(&token),
                json!({
                    "fecha": "2025-03-14",
                    "turno": turno,
                    "tipoReporte": tipo,
                    "areaId": 1
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{turno:?} {tipo:?}");
    }
}

#[tokio::test]
async fn test_areas_rejects_padded_tipo() {
    let app = offline_app(&[]);
    let (status, _) = send(&app, get("/areas?tipo=APOYO_HORAS%20", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_report_missing_fields() {
    let app = offline_app(&[]);
    let token = token_for(1, "ana", &["PLANILLERO"]);

    let (status, body) = send(
        &app,
        post_json("/reportes", Some(&token), json!({ "turno": "Noche" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Faltan campos obligatorios"));
    assert!(message.contains("areaId"));
}

#[tokio::test]
async fn test_create_report_role_gate() {
    let app = offline_app(&[("REPORTES_WRITE_ROLES", "PLANILLERO,ADMIN")]);
    let token = token_for(2, "luis", &["SUPERVISOR"]);

    let (status, body) = send(
        &app,
        post_json(
            "/reportes",
            Some(&token),
            json!({
                "fecha": "2025-03-14",
                "turno": "Tarde",
                "tipoReporte": "APOYO_HORAS",
                "areaId": 1
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    // Sin token el 401 gana al 403
    let (status, _) = send(&app, post_json("/reportes", None, json!({}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_reports_rejects_bad_filters() {
    let app = offline_app(&[]);
    let token = token_for(1, "ana", &["PLANILLERO"]);

    let (status, _) = send(&app, get("/reportes?desde=ayer", Some(&token))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, get("/reportes?turno=Madrugada", Some(&token))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, get("/reportes?areaId=tres", Some(&token))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_report_with_non_numeric_id() {
    let app = offline_app(&[]);
    let (status, body) = send(&app, get("/reportes/abc", None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = offline_app(&[]);
    let (status, _) = send(&app, get("/usuarios", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
