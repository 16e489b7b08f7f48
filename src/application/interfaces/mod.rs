/// Admin service interface
pub mod admin;
/// Student service interface
pub mod alumno;
/// Teacher service interface
pub mod docente;
/// Topic, criteria and submission service interface
pub mod tema;
