//! The closed project status vocabulary.
//!
//! Projects are written by the external automation workflow, which stores
//! these slugs in `projects.status`. The values must match the CHECK
//! constraint in `20260101000002_create_projects.sql`.

use serde::{Deserialize, Serialize};

pub const STATUS_INITIATED: &str = "iniciado";
pub const STATUS_PROCESSING: &str = "processando";
pub const STATUS_SCRIPT_GENERATED: &str = "roteiro_gerado";
pub const STATUS_VIDEO_COMPLETED: &str = "video_concluido";
pub const STATUS_PUBLISHED: &str = "publicado";
pub const STATUS_ERROR: &str = "erro";

/// All valid status values, in pipeline order.
pub const VALID_PROJECT_STATUSES: &[&str] = &[
    STATUS_INITIATED,
    STATUS_PROCESSING,
    STATUS_SCRIPT_GENERATED,
    STATUS_VIDEO_COMPLETED,
    STATUS_PUBLISHED,
    STATUS_ERROR,
];

/// Lifecycle status of a video project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "iniciado")]
    Initiated,
    #[serde(rename = "processando")]
    Processing,
    #[serde(rename = "roteiro_gerado")]
    ScriptGenerated,
    #[serde(rename = "video_concluido")]
    VideoCompleted,
    #[serde(rename = "publicado")]
    Published,
    #[serde(rename = "erro")]
    Error,
}

/// Statistics bucket a status is counted under.
///
/// Every status maps to exactly one bucket, so bucket counts sum to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    InProgress,
    Completed,
    Published,
    Errored,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 6] = [
        Self::Initiated,
        Self::Processing,
        Self::ScriptGenerated,
        Self::VideoCompleted,
        Self::Published,
        Self::Error,
    ];

    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            STATUS_INITIATED => Ok(Self::Initiated),
            STATUS_PROCESSING => Ok(Self::Processing),
            STATUS_SCRIPT_GENERATED => Ok(Self::ScriptGenerated),
            STATUS_VIDEO_COMPLETED => Ok(Self::VideoCompleted),
            STATUS_PUBLISHED => Ok(Self::Published),
            STATUS_ERROR => Ok(Self::Error),
            _ => Err(format!(
                "Invalid project status '{s}'. Must be one of: {}",
                VALID_PROJECT_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initiated => STATUS_INITIATED,
            Self::Processing => STATUS_PROCESSING,
            Self::ScriptGenerated => STATUS_SCRIPT_GENERATED,
            Self::VideoCompleted => STATUS_VIDEO_COMPLETED,
            Self::Published => STATUS_PUBLISHED,
            Self::Error => STATUS_ERROR,
        }
    }

    pub fn bucket(&self) -> StatusBucket {
        match self {
            Self::Initiated | Self::Processing | Self::ScriptGenerated => StatusBucket::InProgress,
            Self::VideoCompleted => StatusBucket::Completed,
            Self::Published => StatusBucket::Published,
            Self::Error => StatusBucket::Errored,
        }
    }
}

impl StatusBucket {
    /// Database values counted under this bucket.
    pub fn statuses(&self) -> Vec<&'static str> {
        ProjectStatus::ALL
            .iter()
            .filter(|s| s.bucket() == *self)
            .map(|s| s.as_str())
            .collect()
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn round_trips_every_database_value() {
        for value in VALID_PROJECT_STATUSES {
            let status = ProjectStatus::from_str_value(value).unwrap();
            assert_eq!(status.as_str(), *value);
        }
    }

    #[test]
    fn rejects_legacy_completed_slug() {
        let err = ProjectStatus::from_str_value("concluido").unwrap_err();
        assert!(err.contains("video_concluido"));
    }

    #[test]
    fn buckets_partition_the_vocabulary() {
        let mut covered: Vec<&str> = [
            StatusBucket::InProgress,
            StatusBucket::Completed,
            StatusBucket::Published,
            StatusBucket::Errored,
        ]
        .iter()
        .flat_map(|b| b.statuses())
        .collect();
        covered.sort_unstable();

        let mut all = VALID_PROJECT_STATUSES.to_vec();
        all.sort_unstable();
        assert_eq!(covered, all);
    }

    #[test]
    fn script_generated_counts_as_in_progress() {
        assert_matches!(
            ProjectStatus::ScriptGenerated.bucket(),
            StatusBucket::InProgress
        );
    }

    #[test]
    fn serde_uses_database_slugs() {
        let json = serde_json::to_string(&ProjectStatus::VideoCompleted).unwrap();
        assert_eq!(json, "\"video_concluido\"");
    }
}
