//! The one place that knows the upstream (Indonesian) field names.
//!
//! If the API renames a field, only [`ColumnMapping::default`] has to change.

/// Canonical column names of the tidy daily table.
pub const DATE: &str = "date";
pub const NEW_CASES: &str = "new_cases";
pub const RECOVERED: &str = "recovered";
pub const DEATHS: &str = "deaths";

/// Describes how the raw per-day payload is reduced to the tidy daily table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Raw columns starting with any of these prefixes (compared
    /// case-insensitively) are dropped.
    drop_prefixes: Vec<String>,
    /// `(lowercased source name, canonical name)` pairs.
    renames: Vec<(String, String)>,
}

impl ColumnMapping {
    pub fn new<P, S>(drop_prefixes: P, renames: Vec<(S, S)>) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            drop_prefixes: drop_prefixes
                .into_iter()
                .map(|p| p.into().to_uppercase())
                .collect(),
            renames: renames
                .into_iter()
                .map(|(from, to)| (from.into().to_lowercase(), to.into()))
                .collect(),
        }
    }

    pub fn is_dropped(&self, column: &str) -> bool {
        let upper = column.to_uppercase();
        self.drop_prefixes
            .iter()
            .any(|prefix| upper.starts_with(prefix.as_str()))
    }

    pub fn renames(&self) -> &[(String, String)] {
        &self.renames
    }

    /// Canonical names in the order they appear in the tidy table.
    pub fn canonical_columns(&self) -> Vec<&str> {
        self.renames.iter().map(|(_, to)| to.as_str()).collect()
    }
}

impl Default for ColumnMapping {
    /// Field names of `list_perkembangan` in the covid19.go.id provincial feed.
    fn default() -> Self {
        ColumnMapping::new(
            ["AKUMULASI", "DIRAWAT"],
            vec![
                ("tanggal", DATE),
                ("kasus", NEW_CASES),
                ("sembuh", RECOVERED),
                ("meninggal", DEATHS),
            ],
        )
    }
}
