//! Shear Server - multi-tenant barbershop booking backend
//!
//! # Architecture
//!
//! - **Database** (`db`): embedded SurrealDB storage, repository layer
//! - **Auth** (`auth`): JWT + Argon2 authentication
//! - **Access** (`access`): role policy, shop visibility, ownership guards
//! - **Booking** (`booking`): appointment lifecycle rules
//! - **HTTP API** (`api`): RESTful routes and handlers
//!
//! # Module layout
//!
//! ```text
//! shear-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT, middleware, extractor
//! ├── access/        # policy, visibility, guards
//! ├── booking/       # appointment lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models and repositories
//! └── utils/         # errors, logging, validation
//! ```

pub mod access;
pub mod api;
pub mod auth;
pub mod booking;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured events on the "security" target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, create the working directory and initialize logging
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(config.log_dir())?;
    init_logger_with_file(Some(&config.log_level), Some(&config.log_dir()));

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____ __
  / ___// /_  ___  ____ ______
  \__ \/ __ \/ _ \/ __ `/ ___/
 ___/ / / / /  __/ /_/ / /
/____/_/ /_/\___/\__,_/_/
    "#
    );
}
