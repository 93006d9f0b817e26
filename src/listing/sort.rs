//! Ordering of the derived view.

use std::cmp::Ordering;
use std::fmt;

use tracing::warn;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::fetch::types::Company;

/// Which company attribute the table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    NumberOfEmployees,
}

impl SortField {
    /// Parse a config value. Anything other than `"name"` orders by head
    /// count, the same fallback the web listing applied to unknown fields.
    pub fn parse(s: &str) -> Self {
        match s {
            "name" => SortField::Name,
            "numberOfEmployees" => SortField::NumberOfEmployees,
            other => {
                warn!("Unknown sort field \"{other}\", ordering by number of employees");
                SortField::NumberOfEmployees
            }
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortField::Name => SortField::NumberOfEmployees,
            SortField::NumberOfEmployees => SortField::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::NumberOfEmployees => "Employees",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ascending or descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `"asc"` is ascending, every other value is descending.
    pub fn parse(s: &str) -> Self {
        if s == "asc" {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Return a new, ordered copy of `companies`.
///
/// The sort is stable in both directions: descending reverses the
/// comparison, not the output, so equal keys keep their input order.
pub fn sort_companies(companies: &[Company], field: SortField, order: SortOrder) -> Vec<Company> {
    let mut sorted = companies.to_vec();
    sorted.sort_by(|a, b| {
        let comparison = match field {
            SortField::Name => locale_cmp(&a.name, &b.name),
            SortField::NumberOfEmployees => a.number_of_employees.cmp(&b.number_of_employees),
        };
        match order {
            SortOrder::Asc => comparison,
            SortOrder::Desc => comparison.reverse(),
        }
    });
    sorted
}

/// Locale-aware string comparison, the way a dictionary orders words.
///
/// Levels, each consulted only on a tie at the previous one:
/// 1. base letters, with accents stripped and case folded, so "Émile" files
///    under E and "école" before "fabric";
/// 2. accents, unaccented first ("ecole" before "école");
/// 3. case at the first differing character, lowercase first;
/// 4. code point order, so the result is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| accent_key(a).cmp(accent_key(b)))
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map(|(x, y)| x.is_uppercase().cmp(&y.is_uppercase()))
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accent_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}
