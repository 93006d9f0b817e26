//! Plain data that crosses from the fetch worker to the UI thread. No
//! `reqwest` handles leave the worker; the UI only ever sees decoded companies
//! or a message.

use std::fmt;

use serde::Deserialize;

// ─── Wire record ────────────────────────────────────────────────────────────

/// One entry of the remote company listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub country: String,
    pub industry: String,
    pub number_of_employees: u64,
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {}]", self.name, self.country, self.industry)
    }
}

// ─── Worker → UI events ─────────────────────────────────────────────────────

/// Outcome of the startup fetch. Exactly one is sent per session.
#[derive(Debug, Clone)]
pub enum FetchEvent {
    /// The listing was fetched and decoded.
    Loaded(Vec<Company>),
    /// Any failure: bad status, transport, or decode. Carries the diagnostic.
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_wire_field_names() {
        let json = r#"[{"name":"Acme","country":"Canada","industry":"Mining","numberOfEmployees":12345}]"#;
        let companies: Vec<Company> = serde_json::from_str(json).unwrap();
        assert_eq!(
            companies,
            [Company {
                name: "Acme".into(),
                country: "Canada".into(),
                industry: "Mining".into(),
                number_of_employees: 12345,
            }]
        );
    }

    #[test]
    fn missing_or_negative_head_count_is_rejected() {
        let missing = r#"[{"name":"Acme","country":"Canada","industry":"Mining"}]"#;
        assert!(serde_json::from_str::<Vec<Company>>(missing).is_err());
        let negative =
            r#"[{"name":"Acme","country":"Canada","industry":"Mining","numberOfEmployees":-1}]"#;
        assert!(serde_json::from_str::<Vec<Company>>(negative).is_err());
    }
}
