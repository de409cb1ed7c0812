mod login;
mod login_page;
mod logout;

pub use login::{login_handler, __path_login_handler, LoginRequestDto, LoginResponse};
pub use login_page::{login_page_handler, __path_login_page_handler};
pub use logout::{logout_handler, __path_logout_handler, LogoutResponseBody};
