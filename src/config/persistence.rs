//! Persistence configuration

/// Configuration for the persisted theme flag
pub struct ThemePersistenceConfig {
    /// Storage key holding `"light"` or `"dark"`
    pub key: &'static str,
}

/// Configuration for native application state
pub struct AppPersistenceConfig {
    /// eframe storage directory name (native only)
    pub app_id: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub theme: ThemePersistenceConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    theme: ThemePersistenceConfig { key: "theme" },
    app: AppPersistenceConfig {
        app_id: "admin-dashboard",
    },
};
