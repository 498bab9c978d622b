use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, RequestMode, Response};

use crate::constants::{
    CREATE_DB_PATH, DATABASES_PATH, LOGIN_PATH, QUERY_PATH, SIGNUP_PATH, UPLOAD_DB_PATH,
};
use crate::error::GatewayError;
use crate::models::{DatabaseList, ErrorBody, LoginResponse, QueryResponse};

/// Status code and raw body text of a finished request.
struct RawResponse {
    status: u16,
    body: String,
}

// REST API Client for the NL2SQL backend
pub struct ApiClient;

impl ApiClient {
    fn url(path: &str) -> String {
        super::api_config().url(path)
    }

    // -------------------------------------------------------------------
    // Authentication
    // -------------------------------------------------------------------

    /// `POST /login/` → access token.
    pub async fn login(username: &str, password: &str) -> Result<String, GatewayError> {
        let form = credentials_form(username, password)?;
        let resp = Self::send(&Self::url(LOGIN_PATH), "POST", Some(&form), None).await?;
        interpret_login(resp.status, &resp.body)
    }

    /// `POST /signup/`.  Does not sign the user in.
    pub async fn register(username: &str, password: &str) -> Result<(), GatewayError> {
        let form = credentials_form(username, password)?;
        let resp = Self::send(&Self::url(SIGNUP_PATH), "POST", Some(&form), None).await?;
        interpret_register(resp.status, &resp.body)
    }

    // -------------------------------------------------------------------
    // Databases
    // -------------------------------------------------------------------

    pub async fn list_databases(token: &str) -> Result<DatabaseList, GatewayError> {
        let resp = Self::send(&Self::url(DATABASES_PATH), "GET", None, Some(token)).await?;
        interpret_json(resp.status, &resp.body)
    }

    pub async fn upload_database(token: &str, file: &web_sys::File) -> Result<(), GatewayError> {
        let form = new_form()?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| GatewayError::Validation(js_error_message(&e)))?;
        let resp = Self::send(&Self::url(UPLOAD_DB_PATH), "POST", Some(&form), Some(token)).await?;
        interpret_ack(resp.status, &resp.body)
    }

    pub async fn create_database(token: &str, name: &str) -> Result<(), GatewayError> {
        let form = new_form()?;
        append_field(&form, "name", name)?;
        let resp = Self::send(&Self::url(CREATE_DB_PATH), "POST", Some(&form), Some(token)).await?;
        interpret_ack(resp.status, &resp.body)
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// `POST /query/` with the question and target database.
    pub async fn submit_query(
        token: &str,
        question: &str,
        database: &str,
    ) -> Result<QueryResponse, GatewayError> {
        let form = new_form()?;
        append_field(&form, "nl_query", question)?;
        append_field(&form, "db_name", database)?;
        let resp = Self::send(&Self::url(QUERY_PATH), "POST", Some(&form), Some(token)).await?;
        interpret_json(resp.status, &resp.body)
    }

    // Helper function to make fetch requests.  Only transport failures are
    // errors here; HTTP status is judged by the caller.
    async fn send(
        url: &str,
        method: &str,
        body: Option<&FormData>,
        token: Option<&str>,
    ) -> Result<RawResponse, GatewayError> {
        Self::send_js(url, method, body, token)
            .await
            .map_err(|e| GatewayError::Network(js_error_message(&e)))
    }

    async fn send_js(
        url: &str,
        method: &str,
        body: Option<&FormData>,
        token: Option<&str>,
    ) -> Result<RawResponse, JsValue> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        if let Some(token) = token {
            headers.append("Authorization", &format!("Bearer {}", token))?;
        }
        opts.set_headers(&headers);

        // The browser sets the multipart boundary itself, so no Content-Type.
        if let Some(form) = body {
            opts.set_body(form);
        }

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        let status = resp.status();
        let text = JsFuture::from(resp.text()?).await?;
        Ok(RawResponse { status, body: text.as_string().unwrap_or_default() })
    }
}

fn new_form() -> Result<FormData, GatewayError> {
    FormData::new().map_err(|e| GatewayError::Validation(js_error_message(&e)))
}

fn append_field(form: &FormData, name: &str, value: &str) -> Result<(), GatewayError> {
    form.append_with_str(name, value)
        .map_err(|e| GatewayError::Validation(js_error_message(&e)))
}

fn credentials_form(username: &str, password: &str) -> Result<FormData, GatewayError> {
    let form = new_form()?;
    append_field(&form, "username", username)?;
    append_field(&form, "password", password)?;
    Ok(form)
}

/// Best-effort text of a rejected promise / thrown JS value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// ---------------------------------------------------------------------------
// Response interpretation (pure, unit-tested)
// ---------------------------------------------------------------------------

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message())
}

fn server_error(status: u16, body: &str) -> GatewayError {
    GatewayError::Server { status, message: server_message(body) }
}

/// The login endpoint answers 200 with `{error}` for bad credentials, so the
/// presence of `access_token` decides success, not the status.
pub(crate) fn interpret_login(status: u16, body: &str) -> Result<String, GatewayError> {
    match serde_json::from_str::<LoginResponse>(body) {
        Ok(LoginResponse { access_token: Some(token), .. }) if is_success(status) => Ok(token),
        Ok(parsed) => Err(GatewayError::Server {
            status,
            message: parsed.error.or_else(|| server_message(body)),
        }),
        Err(_) => Err(server_error(status, body)),
    }
}

pub(crate) fn interpret_register(status: u16, body: &str) -> Result<(), GatewayError> {
    if status == 200 || status == 201 {
        Ok(())
    } else {
        Err(server_error(status, body))
    }
}

pub(crate) fn interpret_ack(status: u16, body: &str) -> Result<(), GatewayError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(server_error(status, body))
    }
}

pub(crate) fn interpret_json<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, GatewayError> {
    if !is_success(status) {
        return Err(server_error(status, body));
    }
    serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_token_is_extracted() {
        let token = interpret_login(200, r#"{"access_token": "T", "token_type": "bearer"}"#);
        assert_eq!(token, Ok("T".to_string()));
    }

    #[test]
    fn login_error_body_is_reported_verbatim() {
        let err = interpret_login(401, r#"{"error": "bad credentials"}"#).unwrap_err();
        assert_eq!(err, GatewayError::Server { status: 401, message: Some("bad credentials".into()) });

        // The backend also answers 200 with an error for unknown users.
        let err = interpret_login(200, r#"{"error": "Invalid credentials"}"#).unwrap_err();
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn login_without_message_falls_back() {
        let err = interpret_login(500, "Internal Server Error").unwrap_err();
        assert_eq!(err, GatewayError::Server { status: 500, message: None });
        let err = interpret_login(422, r#"{"detail": "field required"}"#).unwrap_err();
        assert_eq!(err.user_message("Login failed"), "field required");
    }

    #[test]
    fn register_accepts_200_and_201_only() {
        assert!(interpret_register(200, r#"{"msg": "User created"}"#).is_ok());
        assert!(interpret_register(201, "").is_ok());
        let err = interpret_register(400, r#"{"detail": "User already exists or creation failed"}"#)
            .unwrap_err();
        assert_eq!(err.user_message("Registration failed"), "User already exists or creation failed");
    }

    #[test]
    fn database_list_decodes_on_success() {
        let list: DatabaseList = interpret_json(
            200,
            r#"{"uploaded": [{"name": "a.db", "size": 10, "modified": 1.5}], "created": []}"#,
        )
        .unwrap();
        assert_eq!(list.uploaded[0].name, "a.db");

        let err = interpret_json::<DatabaseList>(200, "not json").unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));

        let err = interpret_json::<DatabaseList>(401, r#"{"detail": "Invalid token"}"#).unwrap_err();
        assert_eq!(err.user_message("x"), "Invalid token");
    }

    #[test]
    fn query_response_decodes_rows() {
        let resp: QueryResponse =
            interpret_json(200, r#"{"sql": "SELECT 1", "results": [{"x": 1}, {"x": 2}]}"#).unwrap();
        assert_eq!(resp.sql, "SELECT 1");
        assert_eq!(resp.results.len(), 2);
    }

    #[test]
    fn ack_checks_status() {
        assert!(interpret_ack(200, r#"{"msg": "Database created"}"#).is_ok());
        let err = interpret_ack(400, r#"{"detail": "Only .db files are allowed"}"#).unwrap_err();
        assert_eq!(err.user_message("Upload failed"), "Only .db files are allowed");
    }
}
