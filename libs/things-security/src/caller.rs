use serde::Serialize;

use crate::ANONYMOUS_LABEL;

/// Resolved facts about the caller of the current request.
///
/// A context without a subject identifier is anonymous. Only authenticated
/// callers can carry the privileged (superuser) flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CallerContext {
    subject_id: Option<String>,
    email: Option<String>,
    privileged: bool,
}

impl CallerContext {
    /// An unauthenticated caller.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> CallerContextBuilder {
        CallerContextBuilder::default()
    }

    /// Whether the upstream resolver authenticated this caller.
    #[inline]
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.subject_id.is_some()
    }

    /// Whether the caller is an application administrator.
    #[inline]
    #[must_use]
    pub fn is_privileged(&self) -> bool {
        self.is_authenticated() && self.privileged
    }

    #[inline]
    #[must_use]
    pub fn subject_id(&self) -> Option<&str> {
        self.subject_id.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Human-readable caller label for logs and denial reasons.
    ///
    /// Prefers the e-mail address, then the subject identifier, and falls
    /// back to [`ANONYMOUS_LABEL`].
    #[must_use]
    pub fn label(&self) -> &str {
        self.email
            .as_deref()
            .or(self.subject_id.as_deref())
            .unwrap_or(ANONYMOUS_LABEL)
    }
}

/// Builder for [`CallerContext`].
#[derive(Debug, Default)]
pub struct CallerContextBuilder {
    subject_id: Option<String>,
    email: Option<String>,
    privileged: bool,
}

impl CallerContextBuilder {
    #[must_use]
    pub fn subject_id(mut self, id: impl Into<String>) -> Self {
        self.subject_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn privileged(mut self, privileged: bool) -> Self {
        self.privileged = privileged;
        self
    }

    /// Finish the context. The privileged flag is dropped when no subject
    /// identifier was supplied.
    #[must_use]
    pub fn build(self) -> CallerContext {
        let privileged = self.privileged && self.subject_id.is_some();
        CallerContext {
            subject_id: self.subject_id,
            email: self.email,
            privileged,
        }
    }
}
