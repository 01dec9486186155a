// ==========================================
// Inventory Console - configuration
// ==========================================
// Environment-resolved settings: database location and the admin
// shared secret. The secret gates the mutating actions in the shell;
// it is a static string compare, nothing more.
// ==========================================

use std::path::PathBuf;

/// Environment variable overriding the database path.
pub const ENV_DB_PATH: &str = "INVENTORY_DB_PATH";

/// Environment variable overriding the admin password.
pub const ENV_ADMIN_PASSWORD: &str = "INVENTORY_ADMIN_PASSWORD";

/// Fallback admin password when the environment does not set one.
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: String,
    pub admin_password: String,
}

impl AppConfig {
    /// Resolve configuration from the environment, with platform
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let db_path = std::env::var(ENV_DB_PATH)
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(default_db_path);

        let admin_password = std::env::var(ENV_ADMIN_PASSWORD)
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());

        Self {
            db_path,
            admin_password,
        }
    }

    /// Shared-secret check for the admin login.
    pub fn verify_admin_password(&self, candidate: &str) -> bool {
        candidate == self.admin_password
    }
}

/// Default database path: the user data directory when available,
/// falling back to the working directory.
pub fn default_db_path() -> String {
    let mut path = PathBuf::from("./inventory.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("inventory-console");
        // best-effort: if the directory cannot be created, the fallback
        // in the working directory still works
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("inventory.db");
        }
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_admin_password() {
        let config = AppConfig {
            db_path: ":memory:".to_string(),
            admin_password: "secret".to_string(),
        };
        assert!(config.verify_admin_password("secret"));
        assert!(!config.verify_admin_password("wrong"));
        assert!(!config.verify_admin_password(""));
    }
}
