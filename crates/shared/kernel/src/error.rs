use std::borrow::Cow;

/// A specialized [`KernelError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// Configuration could not be built or deserialized.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// The identifier has no entry in the technology metadata table.
    #[error("Unknown technology '{id}'{}", format_context(.context))]
    UnknownTechnology { id: String, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal kernel error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl KernelError {
    pub(crate) fn unknown_technology(id: impl Into<String>) -> Self {
        Self::UnknownTechnology { id: id.into(), context: None }
    }

    fn context_mut(&mut self) -> &mut Option<Cow<'static, str>> {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            Self::Config { context, .. } => context,
            Self::UnknownTechnology { context, .. } | Self::Internal { context, .. } => context,
        }
    }
}

/// Attaches a human readable context to a failing result.
pub trait KernelErrorExt<T> {
    /// # Errors
    /// Returns the original error wrapped into [`KernelError`] with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, KernelError>;
}

impl<T> KernelErrorExt<T> for Result<T, KernelError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            *e.context_mut() = Some(context.into());
            e
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<config::ConfigError> for KernelError {
    #[inline]
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<T> KernelErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, KernelError> {
        self.map_err(|source| KernelError::Config { source, context: Some(context.into()) })
    }
}

impl From<&'static str> for KernelError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for KernelError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
