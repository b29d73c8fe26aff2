//! Adoption application domain models and the status state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an adoption application.
///
/// The workflow is `pending → approved → completed`, with
/// `pending → rejected` as the only other edge. `rejected` and
/// `completed` are terminal; a rejected application cannot be reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl ApplicationStatus {
    /// Parse one of the four known status literals.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ApplicationStatus::Pending),
            "approved" => Some(ApplicationStatus::Approved),
            "rejected" => Some(ApplicationStatus::Rejected),
            "completed" => Some(ApplicationStatus::Completed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Completed => "completed",
        }
    }

    /// Whether moving from `self` to `next` follows the workflow.
    pub fn can_transition_to(self, next: ApplicationStatus) -> bool {
        use ApplicationStatus::{Approved, Completed, Pending, Rejected};
        matches!(
            (self, next),
            (Pending, Approved) | (Pending, Rejected) | (Approved, Completed)
        )
    }
}

/// Application row as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub pet_id: Uuid,
    pub applicant_id: Uuid,
    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_phone: Option<String>,
    pub home_type: Option<String>,
    pub has_yard: bool,
    pub has_pets: bool,
    pub experience: Option<String>,
    pub reason: Option<String>,
    pub status: ApplicationStatus,
    pub submitted_date: DateTime<Utc>,
    pub shelter_id: Uuid,
}

/// Application joined with the pet's name and primary image, as returned
/// by the listing queries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApplicationWithPet {
    #[sqlx(flatten)]
    pub application: ApplicationRow,
    pub pet_name: String,
    pub pet_image: Option<String>,
}

/// Fields accepted when an adopter submits an application.
///
/// `shelter_id`, `status` and `submitted_date` are intentionally absent:
/// the shelter is derived from the pet row and the rest is forced
/// server-side at insert time.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub pet_id: Uuid,
    pub applicant_id: Uuid,
    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_phone: Option<String>,
    pub home_type: Option<String>,
    pub has_yard: bool,
    pub has_pets: bool,
    pub experience: Option<String>,
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::ApplicationStatus::{Approved, Completed, Pending, Rejected};
    use super::*;

    #[test]
    fn parse_known_literals() {
        assert_eq!(ApplicationStatus::parse("pending"), Some(Pending));
        assert_eq!(ApplicationStatus::parse("approved"), Some(Approved));
        assert_eq!(ApplicationStatus::parse("rejected"), Some(Rejected));
        assert_eq!(ApplicationStatus::parse("completed"), Some(Completed));
        assert_eq!(ApplicationStatus::parse("Approved"), None);
        assert_eq!(ApplicationStatus::parse("archived"), None);
    }

    #[test]
    fn transition_table() {
        let all = [Pending, Approved, Rejected, Completed];
        for from in all {
            for to in all {
                let legal = matches!(
                    (from, to),
                    (Pending, Approved) | (Pending, Rejected) | (Approved, Completed)
                );
                assert_eq!(from.can_transition_to(to), legal, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn rejected_is_terminal() {
        assert!(!Rejected.can_transition_to(Pending));
        assert!(!Rejected.can_transition_to(Approved));
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Pending).unwrap(), "\"pending\"");
    }
}
