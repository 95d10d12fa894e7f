use std::borrow::Cow;

/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The rolling file appender could not be created (e.g. unwritable directory).
    #[error("Rolling file appender error{}: {source}", format_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// A global tracing subscriber is already installed in this process.
    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// Filesystem failure while preparing the log directory.
    #[error("Logger I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Invalid settings supplied to the builder.
    #[error("Invalid logger configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl LoggerError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidConfiguration { message: message.into(), context: None }
    }
}

/// Attaches a human readable context to a failing result.
pub trait LoggerErrorExt<T> {
    /// # Errors
    /// Returns the original error wrapped into [`LoggerError`] with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LoggerError>;
}

macro_rules! source_variant {
    ($source:ty => $variant:ident) => {
        impl From<$source> for LoggerError {
            #[inline]
            fn from(source: $source) -> Self {
                Self::$variant { source, context: None }
            }
        }

        impl<T> LoggerErrorExt<T> for Result<T, $source> {
            #[inline]
            fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LoggerError> {
                self.map_err(|source| LoggerError::$variant { source, context: Some(context.into()) })
            }
        }
    };
}

source_variant!(tracing_appender::rolling::InitError => Appender);
source_variant!(tracing_subscriber::util::TryInitError => Subscriber);
source_variant!(std::io::Error => Io);

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
