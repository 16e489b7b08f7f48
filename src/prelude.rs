/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/25
******************************************************************************/

//! # Educa Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the Educa Client library.
//!
//! ## Usage
//!
//! ```rust
//! use educa_client::prelude::*;
//!
//! let config = Config::with_base_url("https://educa.tyjet.org/api");
//! let http = HttpClient::new(&config).unwrap();
//! let client = Client::from_http(Arc::new(http));
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Educa API client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, EducaResult};

// ============================================================================
// SESSION MANAGEMENT
// ============================================================================

/// Login, restore and logout
pub use crate::application::auth::SessionManager;

/// Session expiry handler and persistence
pub use crate::session::{
    FileStore, KeyValueStore, MemoryStore, SessionExpiredHandler, SessionExpiryHook,
};

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Role services
pub use crate::application::services::{AdminService, AlumnoService, DocenteService, TemaService};

/// Client the services are implemented on
pub use crate::application::client::Client;

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// Request layer
pub use crate::model::http::{HttpClient, ResponseOutcome, classify_response};

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{
    ConfigureCourseRequest, ConfigureUserRequest, CreateCourseRequest, CreateTopicRequest,
    CreateUserRequest, EditTopicRequest, GradeSubmissionRequest, LoginRequest, RequestBody,
    RequestOptions,
};

/// Response models
pub use crate::model::responses::{
    ApiPayload, Criterion, CriterionType, Grade, Role, TopicState, UserSession, initial_route,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Lima time handling
pub use crate::utils::lima_time::{
    DisplayOptions, LimaInstant, format_for_display, format_for_storage, has_expired, is_open,
    now_as_lima, parse_as_lima,
};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};

/// Re-export reqwest for HTTP operations (if needed for custom implementations)
pub use reqwest::Method;
