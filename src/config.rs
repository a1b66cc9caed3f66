/// Configuration constants for the Tableau REST API
pub mod api {
    /// REST API version used for all requests
    pub const VERSION: &str = "3.24";

    /// Users endpoint
    pub const USERS: &str = "/users";

    /// Groups endpoint
    pub const GROUPS: &str = "/groups";

    /// Projects endpoint
    pub const PROJECTS: &str = "/projects";

    /// Data sources endpoint
    pub const DATASOURCES: &str = "/datasources";

    /// Workbooks endpoint
    pub const WORKBOOKS: &str = "/workbooks";

    /// Flows endpoint
    pub const FLOWS: &str = "/flows";

    /// Views endpoint
    pub const VIEWS: &str = "/views";

    /// Subscriptions endpoint
    pub const SUBSCRIPTIONS: &str = "/subscriptions";

    /// Favorites endpoint
    pub const FAVORITES: &str = "/favorites";

    /// Jobs endpoint
    pub const JOBS: &str = "/jobs";

    /// Tasks endpoint
    pub const TASKS: &str = "/tasks";

    /// Default page size for paged list requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Path to the tabctl credentials file (relative to HOME)
    pub const FILE_PATH: &str = ".tableau/credentials.json";

    /// Environment variable names for the token secret (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["TABLEAU_TOKEN", "TAB_TOKEN"];
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default personal access token name
    pub const TOKEN_NAME: &str = "tabctl";

    /// Default number of consecutive failures before the server suspends a task
    pub const TASK_FAILURE_LIMIT: u32 = 5;

    /// Default poll interval for job status, in seconds
    pub const JOB_POLL_INTERVAL_SECS: u64 = 5;

    /// Default backoff between job retry attempts, in seconds
    pub const JOB_RETRY_BACKOFF_SECS: u64 = 10;

    /// Default days without a sign-in before a user counts as inactive
    pub const INACTIVE_DAYS: u32 = 90;
}
