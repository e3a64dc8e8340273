use thiserror::Error;

/// Errors surfaced by CLI commands, grouped by how an operator should react.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database unavailable: {0}")]
    Connection(String),

    #[error("Referenced customer does not exist: {0}")]
    ForeignKeyViolation(String),

    #[error("Value too long: {0}")]
    ValueTooLong(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) | CliError::Validation(_) => 2,
            CliError::Connection(_) => 3,
            CliError::ForeignKeyViolation(_) | CliError::ValueTooLong(_) => 4,
            CliError::Database(_) => 1,
        }
    }

    /// Classify a database error by its SQLSTATE code.
    fn from_sqlstate(code: &str, message: String) -> Self {
        match code {
            "23503" => CliError::ForeignKeyViolation(message),
            "22001" => CliError::ValueTooLong(message),
            // 08: connection exception, 28: invalid authorization, 3D000: unknown database
            c if c.starts_with("08") || c.starts_with("28") || c == "3D000" => {
                CliError::Connection(message)
            }
            _ => CliError::Database(message),
        }
    }
}

impl From<sqlx::Error> for CliError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => match db_err.code() {
                Some(code) => CliError::from_sqlstate(code.as_ref(), db_err.message().to_string()),
                None => CliError::Database(db_err.to_string()),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => CliError::Connection(err.to_string()),
            _ => CliError::Database(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for CliError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: invalid value", field),
                })
            })
            .collect();
        messages.sort();

        CliError::Validation(messages.join("; "))
    }
}
