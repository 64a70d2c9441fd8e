pub mod common;
pub mod urls;

pub use common::{
    CREDENTIAL_FILE_NAME, DEFAULT_LAUNCH_COMMAND, DEFAULT_PACKAGE, DEFAULT_SERVER_NAME,
    HOST_APP_NAME, HOST_CONFIG_FILE_NAME, HOST_CONFIG_SECTION,
};
pub use urls::{DEFAULT_API_URL, DEFAULT_PRIVATE_REGISTRY, DEFAULT_PUBLIC_REGISTRY};
