mod application;
mod session;
mod utils;
