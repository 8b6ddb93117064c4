use super::*;

// =============================================================
// Display wording
// =============================================================

#[test]
fn auth_errors_display_fixed_messages() {
    assert_eq!(AuthError::MissingToken.to_string(), "No authentication token available");
    assert_eq!(AuthError::NoTokenReceived.to_string(), "No token received from server");
}

#[test]
fn transport_errors_display_by_kind() {
    let server = TransportError::Server { status: 401, message: "Unauthorized".into() };
    assert_eq!(server.to_string(), "API Error 401: Unauthorized");

    let network = TransportError::Network { detail: "connection refused".into() };
    assert_eq!(network.to_string(), "Network error: No response from server");

    let request = TransportError::Request { message: "bad url".into() };
    assert_eq!(request.to_string(), "Request error: bad url");
}

#[test]
fn api_error_is_transparent() {
    let err = ApiError::from(AuthError::MissingToken);
    assert_eq!(err.to_string(), "No authentication token available");

    let err = ApiError::from(TransportError::Server { status: 500, message: "boom".into() });
    assert_eq!(err.to_string(), "API Error 500: boom");
}

// =============================================================
// from_status
// =============================================================

#[test]
fn from_status_uses_body_message() {
    let err = TransportError::from_status(403, r#"{"message":"Forbidden"}"#);
    assert_eq!(err, TransportError::Server { status: 403, message: "Forbidden".into() });
}

#[test]
fn from_status_without_message_is_unknown() {
    let err = TransportError::from_status(500, r#"{"error":"x"}"#);
    assert_eq!(err.to_string(), "API Error 500: Unknown error");
}

#[test]
fn from_status_non_json_body_is_unknown() {
    let err = TransportError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err.to_string(), "API Error 502: Unknown error");
}

#[test]
fn from_status_empty_message_is_unknown() {
    let err = TransportError::from_status(400, r#"{"message":""}"#);
    assert_eq!(err.to_string(), "API Error 400: Unknown error");
}

// =============================================================
// from_reqwest
// =============================================================

#[tokio::test]
async fn from_reqwest_builder_error_is_request_error() {
    let err = reqwest::Client::new()
        .get("not a url")
        .send()
        .await
        .unwrap_err();
    let normalized = TransportError::from_reqwest(&err);
    assert!(matches!(normalized, TransportError::Request { .. }));
    assert!(normalized.to_string().starts_with("Request error: "));
}

#[tokio::test]
async fn from_reqwest_refused_connection_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = reqwest::Client::new()
        .get(format!("http://{addr}/getContent"))
        .send()
        .await
        .unwrap_err();
    let normalized = TransportError::from_reqwest(&err);
    assert!(matches!(normalized, TransportError::Network { .. }));
}
