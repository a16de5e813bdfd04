use storekit_core::{LogSink, UserId};

/// [`LogSink`] implementation that forwards to the `tracing` macros.
///
/// The user id, when present, is attached as a structured field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str, user: Option<UserId>) {
        match user {
            Some(user) => tracing::info!(user = %user, "{message}"),
            None => tracing::info!("{message}"),
        }
    }

    fn warn(&self, message: &str, user: Option<UserId>) {
        match user {
            Some(user) => tracing::warn!(user = %user, "{message}"),
            None => tracing::warn!("{message}"),
        }
    }

    fn error(&self, message: &str, user: Option<UserId>) {
        match user {
            Some(user) => tracing::error!(user = %user, "{message}"),
            None => tracing::error!("{message}"),
        }
    }

    fn debug(&self, message: &str, user: Option<UserId>) {
        match user {
            Some(user) => tracing::debug!(user = %user, "{message}"),
            None => tracing::debug!("{message}"),
        }
    }
}
