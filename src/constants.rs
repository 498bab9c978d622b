// Backend endpoints
pub const LOCAL_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_PROD_API_BASE_URL: &str = "https://nl2sql-ai.onrender.com";
pub const LOCAL_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];

pub const LOGIN_PATH: &str = "/login/";
pub const SIGNUP_PATH: &str = "/signup/";
pub const DATABASES_PATH: &str = "/databases/";
pub const UPLOAD_DB_PATH: &str = "/upload_db/";
pub const CREATE_DB_PATH: &str = "/create_db/";
pub const QUERY_PATH: &str = "/query/";

// Chat copy
pub const GREETING_MESSAGE: &str =
    "Hello! I'm your SQL assistant. Ask me anything about your database.";
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
pub const PROCESSING_MESSAGE: &str = "Processing...";

// Notification copy
pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const REGISTRATION_SUCCEEDED: &str = "Registration successful! Please login.";
pub const LOAD_DATABASES_FAILED: &str = "Failed to load databases";
pub const LOAD_DATABASES_NETWORK_ERROR: &str = "Network error loading databases";
pub const UPLOAD_FAILED: &str = "Upload failed";
pub const UPLOAD_SUCCEEDED: &str = "Database uploaded successfully!";
pub const CREATE_FAILED: &str = "Failed to create database";
pub const CREATE_SUCCEEDED: &str = "Database created successfully!";
pub const QUERY_FAILED: &str = "Query failed";
pub const NO_DATABASE_SELECTED: &str = "No database selected";
pub const LOGIN_REQUIRED: &str = "Please login first";

/// Toasts dismiss themselves after this many milliseconds.
pub const TOAST_DURATION_MS: u32 = 4000;

pub const DATABASE_FILE_EXTENSION: &str = ".db";
