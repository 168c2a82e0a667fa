/*
[INPUT]:  Caller-supplied extra field names for a player CSV export
[OUTPUT]: csv_export request payload restricted to supported fields
[POS]:    Data layer - CSV export payload shaping
[UPDATE]: When OneSignal adds exportable player columns
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extra player columns OneSignal can add to a CSV export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraField {
    Location,
    Country,
    Rooted,
}

impl ExtraField {
    pub const ALL: [ExtraField; 3] = [ExtraField::Location, ExtraField::Country, ExtraField::Rooted];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtraField::Location => "location",
            ExtraField::Country => "country",
            ExtraField::Rooted => "rooted",
        }
    }
}

impl fmt::Display for ExtraField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtraField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExtraField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unsupported extra field: {s}"))
    }
}

/// Body of `POST players/csv_export`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvExportRequest {
    pub extra_fields: Vec<ExtraField>,
}

impl CsvExportRequest {
    /// Keep only the supported names, in the order given.
    ///
    /// Unknown names are dropped silently; no input yields an empty list.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra_fields = names
            .into_iter()
            .filter_map(|name| name.as_ref().parse().ok())
            .collect();
        Self { extra_fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(vec!["location", "country", "rooted"], vec![ExtraField::Location, ExtraField::Country, ExtraField::Rooted])]
    #[case(vec!["rooted", "ip", "location"], vec![ExtraField::Rooted, ExtraField::Location])]
    #[case(vec!["ip", "Country", ""], vec![])]
    #[case(vec![], vec![])]
    fn test_unknown_fields_filtered(#[case] names: Vec<&str>, #[case] expected: Vec<ExtraField>) {
        assert_eq!(CsvExportRequest::from_names(names).extra_fields, expected);
    }

    #[test]
    fn test_absent_fields_yield_empty_list() {
        let names: Option<Vec<String>> = None;
        let request = CsvExportRequest::from_names(names.into_iter().flatten());
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "extra_fields": [] }));
    }

    #[test]
    fn test_payload_shape() {
        let request = CsvExportRequest::from_names(["country", "location"]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "extra_fields": ["country", "location"] })
        );
    }
}
