pub mod add;
pub mod delete;
pub mod directory_helpers;
pub mod init;
pub mod list;
pub mod validate;
