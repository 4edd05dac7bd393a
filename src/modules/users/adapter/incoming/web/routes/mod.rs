mod add_user;
mod fetch_user;
mod list_users;
mod ping;

// Globs so utoipa's generated `__path_*` items travel with the handlers
pub use add_user::*;
pub use fetch_user::*;
pub use list_users::*;
pub use ping::*;
