use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::loc;

lazy_static::lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern");
}

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

/// The sign up form as it goes to the server
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub gender: Option<Gender>,
    /// Url of an already uploaded profile image
    pub pro_image: String,
}

impl RegisterForm {
    /// All problems at once, in form order
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.first_name.trim().is_empty() {
            errors.push(loc!("First Name is required").to_string());
        }
        if self.last_name.trim().is_empty() {
            errors.push(loc!("Last Name is required").to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(loc!("Email is required").to_string());
        } else if !EMAIL.is_match(email) {
            errors.push(loc!("Invalid email").to_string());
        }
        if self.password.is_empty() {
            errors.push(loc!("Password is required").to_string());
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push(loc!("Password must be at least 6 characters").to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
