//! Core data types for the employee directory

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Employee identifier type
pub type EmployeeId = u64;

/// Department slug type
pub type Slug = String;

/// Postal address of an employee
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Street line
    pub address: String,
    /// City
    pub city: String,
}

/// Employer information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    /// Company name
    pub name: String,
    /// Department inside the company, as reported by the remote API
    pub department: String,
}

/// An employee record as returned by the remote API
///
/// Every field except `id` tolerates absence and defaults to blank.
/// `departement` is not remote data: it is a filter tag assigned when the
/// directory is fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique, stable identifier
    pub id: EmployeeId,
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Phone number
    #[serde(default)]
    pub phone: String,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Postal address
    #[serde(default)]
    pub address: Option<Address>,
    /// Employer
    #[serde(default)]
    pub company: Option<Company>,
    /// University
    #[serde(default)]
    pub university: String,
    /// Avatar URL
    #[serde(default)]
    pub image: String,
    /// Department filter tag (a catalog slug, or empty)
    #[serde(default)]
    pub departement: Slug,
}

impl Employee {
    /// First and last name joined by a single space
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Street and city joined by a comma, skipping blank parts
    #[must_use]
    pub fn address_line(&self) -> String {
        self.address.as_ref().map_or_else(String::new, |address| {
            [address.address.as_str(), address.city.as_str()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(", ")
        })
    }

    /// Company name, blank when unknown
    #[must_use]
    pub fn company_name(&self) -> &str {
        self.company.as_ref().map_or("", |company| company.name.as_str())
    }

    /// Company department, blank when unknown
    #[must_use]
    pub fn company_department(&self) -> &str {
        self.company
            .as_ref()
            .map_or("", |company| company.department.as_str())
    }

    /// Street line, blank when unknown
    #[must_use]
    pub fn street(&self) -> &str {
        self.address
            .as_ref()
            .map_or("", |address| address.address.as_str())
    }
}

/// One page of the remote employee collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeePage {
    /// Records in this page
    pub users: Vec<Employee>,
    /// Size of the whole remote collection
    pub total: u64,
    /// Offset of this page
    pub skip: u64,
    /// Requested page size
    pub limit: u64,
}

/// A department (a category of the remote catalog)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique, URL-safe key
    pub slug: Slug,
    /// Display label
    #[serde(default)]
    pub name: String,
    /// Remote listing URL, unused by the directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Department {
    /// Display label, falling back to the slug
    #[must_use]
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.slug
        } else {
            &self.name
        }
    }
}

/// UI colour theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// Stored representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark theme
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(crate::Error::Validation {
                field: "theme".to_string(),
                message: format!("unknown theme '{other}'"),
            }),
        }
    }
}
