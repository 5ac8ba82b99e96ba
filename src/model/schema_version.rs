//! Schema version: which revision of the args shape an action conforms to.

use std::fmt;

use super::{LearnerActionError, Result};

/// The schema version new actions get when none is given.
pub const LATEST_SCHEMA_VERSION: SchemaVersion = SchemaVersion(1);

/// A schema version, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion(i64);

impl SchemaVersion {
    /// Validates a raw version number.
    ///
    /// # Errors
    ///
    /// Returns [`LearnerActionError::InvalidSchemaVersion`] if `version` is below 1.
    pub fn new(version: i64) -> Result<Self> {
        if version < 1 {
            return Err(LearnerActionError::InvalidSchemaVersion(version));
        }
        Ok(Self(version))
    }

    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        LATEST_SCHEMA_VERSION
    }
}

impl TryFrom<i64> for SchemaVersion {
    type Error = LearnerActionError;

    fn try_from(version: i64) -> Result<Self> {
        Self::new(version)
    }
}

impl From<SchemaVersion> for i64 {
    fn from(version: SchemaVersion) -> Self {
        version.0
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_and_above() {
        for v in [1, 2, 7, i64::MAX] {
            assert_eq!(SchemaVersion::new(v).unwrap().get(), v);
        }
    }

    #[test]
    fn rejects_zero_and_negatives() {
        for v in [0, -1, i64::MIN] {
            let err = SchemaVersion::new(v).unwrap_err();
            assert!(matches!(err, LearnerActionError::InvalidSchemaVersion(got) if got == v));
        }
    }

    #[test]
    fn converts_to_and_from_i64() {
        let version = SchemaVersion::try_from(2_i64).unwrap();
        assert_eq!(i64::from(version), 2);
        assert_eq!(version.to_string(), "2");
        assert!(SchemaVersion::try_from(0_i64).is_err());
    }

    #[test]
    fn default_is_latest() {
        assert_eq!(SchemaVersion::default(), LATEST_SCHEMA_VERSION);
        assert!(LATEST_SCHEMA_VERSION.get() >= 1);
    }
}
