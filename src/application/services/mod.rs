/// Admin endpoints on `admins.php`
pub mod admin_service;
/// Student endpoints on `alumnos.php`
pub mod alumno_service;
/// Teacher endpoints on `docentes.php`
pub mod docente_service;
/// Topic endpoints on `temas.php`
pub mod tema_service;

pub use crate::application::interfaces::admin::*;
pub use crate::application::interfaces::alumno::*;
pub use crate::application::interfaces::docente::*;
pub use crate::application::interfaces::tema::*;
