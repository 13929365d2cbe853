/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Session state and login payload
pub mod auth;
/// Session manager and request primitive
pub mod http;
/// Request options and cache fingerprints
pub mod requests;
/// Raw payloads returned by the portal endpoints
pub mod responses;
/// HTTP transport abstraction
pub mod transport;
/// Date parsing helpers
pub mod utils;
