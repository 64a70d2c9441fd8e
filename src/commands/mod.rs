pub mod guide;
pub mod install;
