//! Login and register form values with their field rules.
//!
//! Validation is local and synchronous; a form only turns into a request
//! once every rule passes.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{FullName, LoginRequest, RegisterRequest};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// Per-field messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }

    fn check(&mut self, field: Field, rule: Option<&'static str>) {
        if let Some(message) = rule {
            self.0.insert(field, message);
        }
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.as_str(), message)?;
            first = false;
        }
        Ok(())
    }
}

fn email_rule(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !EMAIL_PATTERN.is_match(email) {
        Some("Invalid email address")
    } else {
        None
    }
}

fn password_rule(password: &str, too_short: &'static str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some(too_short)
    } else {
        None
    }
}

fn name_rule(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("Required")
    } else if name.chars().count() < MIN_NAME_LEN {
        Some("Min 2 chars")
    } else {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(Field::Email, email_rule(&self.email));
        errors.check(
            Field::Password,
            password_rule(&self.password, "Password must be at least 6 characters"),
        );
        errors.into_result(|| LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(Field::FirstName, name_rule(&self.first_name));
        errors.check(Field::LastName, name_rule(&self.last_name));
        errors.check(Field::Email, email_rule(&self.email));
        errors.check(Field::Password, password_rule(&self.password, "Min 6 characters"));
        errors.into_result(|| RegisterRequest {
            full_name: FullName {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
            },
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}
