/// Default base URL of the Educa REST API
pub const DEFAULT_API_BASE_URL: &str = "https://educa.tyjet.org/api";
/// User agent string used in HTTP requests to identify this client to the backend
pub const USER_AGENT: &str = "educa-client/0.1.0";
/// Content type sent with every request unless the caller overrides it
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
/// Message raised when the backend answers 401 or 403
pub const SESSION_EXPIRED_MESSAGE: &str = "Sesión expirada. Por favor inicia sesión nuevamente.";
/// Lowercase fragments of an `error` message that mean the session is gone
pub const AUTH_ERROR_KEYWORDS: [&str; 3] = ["sesión", "no autenticado", "no autorizado"];
/// Storage key holding the serialized user session
pub const SESSION_STORAGE_KEY: &str = "educa_user";
/// Default directory for the file-backed session store
pub const DEFAULT_STORAGE_DIR: &str = ".educa";
/// Lima civil time offset from UTC in minutes (UTC-5, no daylight saving)
pub const LIMA_OFFSET_MINUTES: i32 = -300;
/// Storage layout of backend timestamps
pub const STORAGE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Message returned when login is attempted with blank fields
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Por favor completa todos los campos";
/// Login endpoint
pub const LOGIN_PATH: &str = "/logins.php";
/// Admin endpoints
pub const ADMINS_PATH: &str = "/admins.php";
/// Teacher endpoints
pub const DOCENTES_PATH: &str = "/docentes.php";
/// Student endpoints
pub const ALUMNOS_PATH: &str = "/alumnos.php";
/// Topic, criteria and submission endpoints
pub const TEMAS_PATH: &str = "/temas.php";
