/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/25
******************************************************************************/
/// HTTP request layer and response classification
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Path building and lenient deserialization helpers
pub mod utils;
