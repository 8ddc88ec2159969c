//! Account data model: users, registration input and login credentials.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored in place of a real password hash. Passwords are collected but never
/// hashed nor verified.
pub const PASSWORD_PLACEHOLDER: &str = "hashed_password";

/// Sequential user identifier; the first registered user is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parse a path segment. Anything that is not a positive integer yields
    /// `None`, which callers report as an unknown user.
    ///
    /// # Examples
    /// ```
    /// use cashflow_backend::domain::UserId;
    ///
    /// assert_eq!(UserId::parse("12"), Some(UserId::new(12)));
    /// assert_eq!(UserId::parse("abc"), None);
    /// assert_eq!(UserId::parse("0"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u64>().ok().filter(|id| *id > 0).map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Subscription tier. Every new account starts on [`Plan::Starter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Entry tier assigned at registration.
    #[default]
    Starter,
    /// Mid tier.
    Professional,
    /// Top tier.
    Enterprise,
}

/// Stored account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub plan: Plan,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub payment_customer_id: Option<String>,
}

impl User {
    /// Public view of the account; never includes the password.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            plan: self.plan,
        }
    }
}

/// Account fields returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub company: String,
    pub plan: Plan,
}

/// Account draft handed to the record store, which assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub company: String,
    pub plan: Plan,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Bind a store-assigned identifier.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            company: self.company,
            plan: self.plan,
            password_hash: self.password_hash,
            created_at: self.created_at,
            payment_customer_id: None,
        }
    }
}

/// Raised when required request fields are absent or blank.
///
/// Field names are reported in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required fields: {}", .fields.join(", "))]
pub struct MissingFields {
    pub fields: Vec<&'static str>,
}

impl MissingFields {
    /// Collect the names whose value is absent or blank.
    ///
    /// # Errors
    /// Returns [`MissingFields`] naming every absent field.
    ///
    /// # Examples
    /// ```
    /// use cashflow_backend::domain::MissingFields;
    ///
    /// let err = MissingFields::check(&[("name", Some("Ada")), ("email", None)]).unwrap_err();
    /// assert_eq!(err.to_string(), "Missing required fields: email");
    /// ```
    pub fn check(fields: &[(&'static str, Option<&str>)]) -> Result<(), Self> {
        Self::from_presence(
            fields
                .iter()
                .map(|(name, value)| (*name, value.is_some_and(|v| !v.trim().is_empty()))),
        )
    }

    /// Collect the names flagged as absent.
    ///
    /// # Errors
    /// Returns [`MissingFields`] naming every field whose flag is `false`.
    pub fn from_presence(
        fields: impl IntoIterator<Item = (&'static str, bool)>,
    ) -> Result<(), Self> {
        let missing = Self::among(fields);
        if missing.fields.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    /// Names whose flag is `false`, in order. May be empty.
    #[must_use]
    pub fn among(fields: impl IntoIterator<Item = (&'static str, bool)>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .filter(|(_, present)| !present)
                .map(|(name, _)| name)
                .collect(),
        }
    }
}

/// Validated registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: String,
    email: String,
    company: String,
    password: String,
}

impl Registration {
    /// Validate raw registration fields.
    ///
    /// # Errors
    /// Returns [`MissingFields`] listing every absent or blank field.
    pub fn try_from_parts(
        name: Option<&str>,
        email: Option<&str>,
        company: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, MissingFields> {
        MissingFields::check(&[
            ("name", name),
            ("email", email),
            ("company", company),
            ("password", password),
        ])?;
        Ok(Self {
            name: name.unwrap_or_default().trim().to_owned(),
            email: email.unwrap_or_default().trim().to_owned(),
            company: company.unwrap_or_default().trim().to_owned(),
            password: password.unwrap_or_default().to_owned(),
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Login e-mail.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Company name.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Raw password. Only its presence is checked.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Validated login input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: String,
}

impl LoginCredentials {
    /// Validate raw login fields.
    ///
    /// # Errors
    /// Returns [`MissingFields`] when the e-mail or password is absent.
    pub fn try_from_parts(email: Option<&str>, password: Option<&str>) -> Result<Self, MissingFields> {
        MissingFields::check(&[("email", email), ("password", password)])?;
        Ok(Self {
            email: email.unwrap_or_default().trim().to_owned(),
            password: password.unwrap_or_default().to_owned(),
        })
    }

    /// Login e-mail.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Raw password; accepted without verification.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Opaque, non-verifiable token handed out at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Token issued for `user_id`.
    #[must_use]
    pub fn for_user(user_id: UserId) -> Self {
        Self(format!("fake-jwt-token-{user_id}"))
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
