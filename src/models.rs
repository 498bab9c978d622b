use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which dashboard list a database came from.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    Uploaded,
    Created,
}

impl DatabaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::Uploaded => "uploaded",
            DatabaseKind::Created => "created",
        }
    }

    /// Inverse of [`DatabaseKind::as_str`].
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "uploaded" => Some(DatabaseKind::Uploaded),
            "created" => Some(DatabaseKind::Created),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatabaseKind::Uploaded => "Uploaded Database",
            DatabaseKind::Created => "Created Database",
        }
    }
}

/// The database currently targeted by chat queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveDatabase {
    pub name: String,
    pub kind: DatabaseKind,
}

// ---------------------------------------------------------------------------
// API models that match the backend schema
// ---------------------------------------------------------------------------

/// One entry of `GET /databases/`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct DatabaseInfo {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    /// Seconds since the UNIX epoch (fractional).
    #[serde(default)]
    pub modified: f64,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct DatabaseList {
    #[serde(default)]
    pub uploaded: Vec<DatabaseInfo>,
    #[serde(default)]
    pub created: Vec<DatabaseInfo>,
}

impl DatabaseList {
    pub fn entries(&self, kind: DatabaseKind) -> &[DatabaseInfo] {
        match kind {
            DatabaseKind::Uploaded => &self.uploaded,
            DatabaseKind::Created => &self.created,
        }
    }
}

/// Body of `POST /login/`.  The backend answers 200 for bad credentials too,
/// with `error` set instead of `access_token`.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct LoginResponse {
    pub access_token: Option<String>,
    pub error: Option<String>,
}

/// Generic error envelope.  FastAPI uses `detail`; a few endpoints use `msg`
/// or `error`.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub detail: Option<Value>,
    pub msg: Option<String>,
}

impl ErrorBody {
    /// First server-supplied message, in `error`, `detail`, `msg` order.
    pub fn message(&self) -> Option<String> {
        if let Some(e) = &self.error {
            return Some(e.clone());
        }
        match &self.detail {
            Some(Value::String(s)) => return Some(s.clone()),
            // Validation failures come back as a list of objects.
            Some(Value::Null) | None => {}
            Some(other) => return Some(other.to_string()),
        }
        self.msg.clone()
    }
}

/// A single result row: column name → value, in server order.
pub type ResultRow = Map<String, Value>;

#[derive(Clone, Deserialize, Debug, PartialEq, Default)]
pub struct QueryResponse {
    pub sql: String,
    #[serde(default)]
    pub results: Vec<ResultRow>,
}
