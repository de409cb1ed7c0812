pub mod lang;
pub mod routes;
