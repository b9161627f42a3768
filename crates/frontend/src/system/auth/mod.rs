pub mod session;

pub use session::{login_url, redirect_to_login, session_expired_hook};
