mod add_user;
mod fetch_user;
mod list_users;

pub use add_user::AddUserService;
pub use fetch_user::FetchUserService;
pub use list_users::ListUsersService;
