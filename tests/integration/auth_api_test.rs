//! Authentication API integration tests
//!
//! Exercises the composed router end to end: login request validation,
//! credential rejection, session issuance, cookie round-trips, logout,
//! and tamper rejection.

use axum::http::{header, StatusCode};

mod common;

use common::{body_json, body_text, session_cookie_pair, TestApp, JUDGE_EMAIL, JUDGE_PASSWORD};

mod login_validation {
    use super::*;

    #[tokio::test]
    async fn missing_email_returns_400_without_cookie() {
        let app = TestApp::new();
        let response = app.login(r#"{"password": "whatever"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn missing_password_returns_400_without_cookie() {
        let app = TestApp::new();
        let response = app.login(r#"{"email": "judge@nestfest.com"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn empty_body_returns_400_without_cookie() {
        let app = TestApp::new();
        let response = app.login("{}").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn malformed_json_returns_400() {
        let app = TestApp::new();
        let response = app.login("not json at all").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

mod login_credentials {
    use super::*;

    #[tokio::test]
    async fn wrong_password_returns_generic_401() {
        let app = TestApp::new();
        let response = app
            .login(r#"{"email": "judge@nestfest.com", "password": "wrong-password"}"#)
            .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid email or password");
    }

    #[tokio::test]
    async fn unknown_email_indistinguishable_from_wrong_password() {
        let app = TestApp::new();

        let unknown = app
            .login(r#"{"email": "nobody@nestfest.com", "password": "NestFest2024!Secure"}"#)
            .await;
        let unknown_status = unknown.status();
        let unknown_body = body_json(unknown).await;

        let wrong = app
            .login(r#"{"email": "judge@nestfest.com", "password": "bad"}"#)
            .await;
        let wrong_status = wrong.status();
        let wrong_body = body_json(wrong).await;

        assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_status, wrong_status);
        assert_eq!(unknown_body, wrong_body, "401 bodies must not differ");
    }

    #[tokio::test]
    async fn valid_credentials_return_user_and_cookie() {
        let app = TestApp::new();
        let response = app
            .login(r#"{"email": "judge@nestfest.com", "password": "NestFest2024!Secure"}"#)
            .await;

        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("session cookie must be set")
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("session="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("SameSite=Lax"));
        assert!(set_cookie.contains("Max-Age=86400"));

        let judge_id = app.judge.id;
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["id"], judge_id.to_string());
        assert_eq!(body["user"]["email"], JUDGE_EMAIL);
        assert_eq!(body["user"]["role"], "judge");
        assert_eq!(body["user"]["university"], "Austin Community College");
        assert_eq!(body["user"]["verified"], true);
    }

    #[tokio::test]
    async fn response_never_contains_password_material() {
        let app = TestApp::new();
        let response = app
            .login(r#"{"email": "judge@nestfest.com", "password": "NestFest2024!Secure"}"#)
            .await;

        let text = body_text(response).await;
        assert!(!text.contains("password"));
        assert!(!text.contains(JUDGE_PASSWORD));
    }
}

mod session_roundtrip {
    use super::*;

    #[tokio::test]
    async fn issued_cookie_authenticates_me_with_same_user() {
        let app = TestApp::new();
        let login = app
            .login(r#"{"email": "judge@nestfest.com", "password": "NestFest2024!Secure"}"#)
            .await;
        let cookie = session_cookie_pair(&login);

        let response = app.me(Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["user"]["id"], app.judge.id.to_string());
        assert_eq!(body["user"]["email"], JUDGE_EMAIL);
    }

    #[tokio::test]
    async fn me_without_cookie_returns_401() {
        let app = TestApp::new();
        let response = app.me(None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn tampered_cookie_rejected() {
        let app = TestApp::new();
        let login = app
            .login(r#"{"email": "judge@nestfest.com", "password": "NestFest2024!Secure"}"#)
            .await;
        let cookie = session_cookie_pair(&login);

        // Flip one byte in the middle of the signed token (payload section)
        let mut bytes = cookie.into_bytes();
        let mid = bytes.len() / 2;
        bytes[mid] = if bytes[mid] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        let response = app.me(Some(&tampered)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid or expired session");
    }

    #[tokio::test]
    async fn forged_cookie_without_login_rejected() {
        let app = TestApp::new();
        let response = app.me(Some("session=completely.forged.token")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn two_logins_issue_distinct_tokens() {
        let app = TestApp::new();
        let body = r#"{"email": "judge@nestfest.com", "password": "NestFest2024!Secure"}"#;

        let first = session_cookie_pair(&app.login(body).await);
        let second = session_cookie_pair(&app.login(body).await);
        assert_ne!(first, second, "session tokens must be unique per login");
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    async fn logout_clears_cookie() {
        let app = TestApp::new();
        let response = app
            .request(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/v1/auth/logout")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await;

        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("logout must clear the cookie")
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("session=;"));
        assert!(set_cookie.contains("Max-Age=0"));

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
    }
}

mod infrastructure {
    use super::*;

    #[tokio::test]
    async fn health_check_responds() {
        let app = TestApp::new();
        let response = app
            .request(
                axum::http::Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
    }
}
