#![deny(missing_docs)]

//! # Run Counters
//!
//! Tallies reported at the end of a run. Nothing reads them to make decisions.

use std::fmt::Display;

/// Per-run page counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    /// Resource overview pages written.
    pub resources: usize,
    /// Get and list pages written (relationship lists included).
    pub get_list: usize,
    /// Update pages written.
    pub patch: usize,
    /// Method, create and delete pages written.
    pub methods: usize,
    /// List pages derived from a relationship.
    pub list_from_relationship: usize,
    /// Entity sets encountered.
    pub entity_sets: usize,
}

impl Display for RunCounters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "*** resource pages: {}", self.resources)?;
        writeln!(f, "*** get/list pages: {}", self.get_list)?;
        writeln!(f, "*** update pages: {}", self.patch)?;
        writeln!(f, "*** method pages: {}", self.methods)?;
        writeln!(f, "*** lists from relationships: {}", self.list_from_relationship)?;
        write!(f, "*** entity sets: {}", self.entity_sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let counters = RunCounters {
            resources: 2,
            entity_sets: 1,
            ..Default::default()
        };
        let report = counters.to_string();
        assert_eq!(report.lines().count(), 6);
        assert!(report.starts_with("*** resource pages: 2"));
        assert!(report.ends_with("*** entity sets: 1"));
    }
}
