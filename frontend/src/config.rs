use shared::ClientConfig;

use crate::services::logging::Logger;

/// Read the build-time settings, falling back to defaults for anything invalid.
///
/// `EXPENSE_API_BASE_URL` is the backend root, `EXPENSE_PARTICIPANTS` the
/// comma-separated pair of people splitting expenses.
pub fn load() -> ClientConfig {
    let (config, errors) = ClientConfig::resolve(
        option_env!("EXPENSE_API_BASE_URL"),
        option_env!("EXPENSE_PARTICIPANTS"),
    );

    for error in errors {
        Logger::warn_with_component("config", &format!("{}, using the default", error));
    }
    Logger::info_with_component("config", &format!("Using backend at {}", config.base_url));

    config
}
