//! Application configuration module
//!
//! Handles environment variables, the named configuration variants and
//! the policies derived from them.

mod constants;
mod environment;
mod session;
mod settings;
mod upload;

pub use constants::*;
pub use environment::Environment;
pub use session::SessionPolicy;
pub use settings::{environment_name, load_dotenv, Config};
pub use upload::UploadPolicy;
