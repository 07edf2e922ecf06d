use std::{collections::BTreeMap, fmt};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("phone regex");
}

/// `true` for empty input or the conventional `NNN-NNN-NNNN` grouping.
///
/// This is a strict format check, not a semantic phone validity check.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.is_empty() || PHONE_REGEX.is_match(phone)
}

/// Field-scoped validation messages collected by the form contracts.
///
/// Fields keep a stable order so rendered error lists do not jump around
/// between submissions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn of_field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (*field, messages.as_slice()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let mut first = true;
        for (field, messages) in self.0.iter() {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}
