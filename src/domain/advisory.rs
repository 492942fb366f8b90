//! Advisory-scan evidence schema
//!
//! Mirrors the JSON report emitted by the external vulnerability scanner
//! (`cargo audit --json`). The report is read-only input; unknown fields are
//! ignored.

use serde::Deserialize;

/// Full scan report: known vulnerabilities plus lesser advisory warnings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvisoryReport {
    #[serde(default)]
    pub vulnerabilities: VulnerabilityList,
    #[serde(default)]
    pub warnings: WarningSet,
}

impl AdvisoryReport {
    /// Parses a raw scan report
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// All advisory warnings in category order: unmaintained, unsound, notice
    pub fn advisory_warnings(&self) -> impl Iterator<Item = &AdvisoryWarning> {
        self.warnings
            .unmaintained
            .iter()
            .chain(&self.warnings.unsound)
            .chain(&self.warnings.notice)
    }
}

/// Known vulnerabilities affecting the current graph
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VulnerabilityList {
    #[serde(default)]
    pub list: Vec<Vulnerability>,
}

/// A single vulnerability record
#[derive(Debug, Clone, Deserialize)]
pub struct Vulnerability {
    pub id: String,
    pub package: AdvisoryPackage,
}

/// Package affected by a vulnerability
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisoryPackage {
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// Lesser advisory warnings, grouped by category
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WarningSet {
    #[serde(default)]
    pub unmaintained: Vec<AdvisoryWarning>,
    #[serde(default)]
    pub unsound: Vec<AdvisoryWarning>,
    #[serde(default)]
    pub notice: Vec<AdvisoryWarning>,
}

/// One advisory warning; the scanner may omit either reference
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvisoryWarning {
    #[serde(default)]
    pub advisory: Option<WarningAdvisory>,
    #[serde(default)]
    pub package: Option<WarningPackage>,
}

impl AdvisoryWarning {
    /// Advisory identifier, when the scanner attached one
    pub fn advisory_id(&self) -> Option<&str> {
        self.advisory.as_ref().map(|a| a.id.as_str())
    }

    /// Affected package name, or a placeholder when absent
    pub fn package_name(&self) -> &str {
        self.package
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("unknown-package")
    }
}

/// Advisory reference inside a warning
#[derive(Debug, Clone, Deserialize)]
pub struct WarningAdvisory {
    pub id: String,
}

/// Package reference inside a warning
#[derive(Debug, Clone, Deserialize)]
pub struct WarningPackage {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "database": { "advisory-count": 700 },
        "vulnerabilities": {
            "found": true,
            "count": 1,
            "list": [
                { "advisory": { "title": "x" },
                  "id": "RUSTSEC-2024-0001",
                  "package": { "name": "badcrate", "version": "0.3.1" } }
            ]
        },
        "warnings": {
            "unmaintained": [
                { "advisory": { "id": "RUSTSEC-2023-0100" }, "package": { "name": "oldcrate" } }
            ],
            "unsound": [],
            "notice": [
                { "package": { "name": "noisycrate" } }
            ]
        }
    }"#;

    #[test]
    fn test_from_json_full_report() {
        let report = AdvisoryReport::from_json(SAMPLE).unwrap();
        assert_eq!(report.vulnerabilities.list.len(), 1);
        assert_eq!(report.vulnerabilities.list[0].id, "RUSTSEC-2024-0001");
        assert_eq!(report.vulnerabilities.list[0].package.name, "badcrate");
        assert_eq!(report.vulnerabilities.list[0].package.version, "0.3.1");
    }

    #[test]
    fn test_advisory_warnings_category_order() {
        let report = AdvisoryReport::from_json(SAMPLE).unwrap();
        let warnings: Vec<_> = report.advisory_warnings().collect();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].advisory_id(), Some("RUSTSEC-2023-0100"));
        assert_eq!(warnings[0].package_name(), "oldcrate");
        assert_eq!(warnings[1].advisory_id(), None);
        assert_eq!(warnings[1].package_name(), "noisycrate");
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let report = AdvisoryReport::from_json("{}").unwrap();
        assert!(report.vulnerabilities.list.is_empty());
        assert_eq!(report.advisory_warnings().count(), 0);
    }

    #[test]
    fn test_package_name_placeholder() {
        let warning = AdvisoryWarning::default();
        assert_eq!(warning.package_name(), "unknown-package");
        assert_eq!(warning.advisory_id(), None);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(AdvisoryReport::from_json("not json").is_err());
        assert!(AdvisoryReport::from_json(r#"{"warnings": []}"#).is_err());
    }
}
