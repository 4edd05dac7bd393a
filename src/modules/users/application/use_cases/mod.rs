pub mod add_user;
pub mod fetch_user;
pub mod list_users;
