pub mod bootstrap_admin;
pub mod login_admin;
pub mod logout_admin;
pub mod resolve_session;
