//! Country / industry narrowing.

use crate::fetch::types::Company;

/// Keep the companies whose country and industry match the given values.
///
/// `None` (or an empty string) leaves that dimension unfiltered. Matching is
/// exact: case-sensitive and untrimmed. The input is never modified.
pub fn filter_companies(
    companies: &[Company],
    country: Option<&str>,
    industry: Option<&str>,
) -> Vec<Company> {
    let country = country.filter(|c| !c.is_empty());
    let industry = industry.filter(|i| !i.is_empty());

    companies
        .iter()
        .filter(|company| {
            let country_match = country.map_or(true, |c| company.country == c);
            let industry_match = industry.map_or(true, |i| company.industry == i);
            country_match && industry_match
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str, country: &str, industry: &str) -> Company {
        Company {
            name: name.into(),
            country: country.into(),
            industry: industry.into(),
            number_of_employees: 10,
        }
    }

    fn sample() -> Vec<Company> {
        vec![
            company("Maple Works", "Canada", "Manufacturing"),
            company("Outback Data", "Australia", "Technology"),
            company("Northern Bytes", "Canada", "Technology"),
            company("Harbour Freight", "Australia", "Logistics"),
        ]
    }

    fn names(companies: &[Company]) -> Vec<&str> {
        companies.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn no_filters_returns_everything_in_order() {
        let all = sample();
        assert_eq!(filter_companies(&all, None, None), all);
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let all = sample();
        assert_eq!(filter_companies(&all, Some(""), Some("")), all);
    }

    #[test]
    fn country_only() {
        let all = sample();
        let out = filter_companies(&all, Some("Canada"), None);
        assert_eq!(names(&out), ["Maple Works", "Northern Bytes"]);
    }

    #[test]
    fn industry_only() {
        let all = sample();
        let out = filter_companies(&all, None, Some("Technology"));
        assert_eq!(names(&out), ["Outback Data", "Northern Bytes"]);
    }

    #[test]
    fn both_predicates_must_hold() {
        let all = sample();
        let out = filter_companies(&all, Some("Australia"), Some("Technology"));
        assert_eq!(names(&out), ["Outback Data"]);
    }

    #[test]
    fn matching_is_case_sensitive_and_untrimmed() {
        let all = sample();
        assert!(filter_companies(&all, Some("canada"), None).is_empty());
        assert!(filter_companies(&all, Some("Canada "), None).is_empty());
    }

    #[test]
    fn no_match_yields_empty() {
        let all = sample();
        assert!(filter_companies(&all, Some("Canada"), Some("Logistics")).is_empty());
    }

    #[test]
    fn empty_input_yields_empty() {
        assert!(filter_companies(&[], Some("Canada"), None).is_empty());
        assert!(filter_companies(&[], None, None).is_empty());
    }

    #[test]
    fn every_result_satisfies_the_predicates() {
        let all = sample();
        for country in [None, Some("Canada"), Some("Australia")] {
            for industry in [None, Some("Technology"), Some("Logistics")] {
                let out = filter_companies(&all, country, industry);
                let expected: Vec<_> = all
                    .iter()
                    .filter(|c| country.map_or(true, |v| c.country == v))
                    .filter(|c| industry.map_or(true, |v| c.industry == v))
                    .cloned()
                    .collect();
                assert_eq!(out, expected, "country={country:?} industry={industry:?}");
            }
        }
    }
}
