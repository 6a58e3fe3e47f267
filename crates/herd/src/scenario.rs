//! The create/read/update/delete walkthrough run by the `herd` binary.
//!
//! Every step runs even when an earlier one failed; failures are recorded in
//! the report instead of aborting the run.

use herd_core::storage::CrudRepository;
use herd_core::unicorn::{Identifiable, Unicorn};
use serde::Serialize;

/// One step of the walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Create,
    Retrieve,
    Update,
    Delete,
    RetrieveDeleted,
}

impl Step {
    /// Past-tense verb used when the step succeeded.
    pub fn done(&self) -> &'static str {
        match self {
            Step::Create => "Created",
            Step::Retrieve | Step::RetrieveDeleted => "Retrieved",
            Step::Update => "Updated",
            Step::Delete => "Deleted",
        }
    }

    /// Progressive verb used when the step failed.
    pub fn doing(&self) -> &'static str {
        match self {
            Step::Create => "creating",
            Step::Retrieve | Step::RetrieveDeleted => "retrieving",
            Step::Update => "updating",
            Step::Delete => "deleting",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Ok { unicorn: Option<Unicorn> },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub step: Step,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl StepReport {
    fn new<T>(
        step: Step,
        result: herd_core::storage::Result<T>,
        unicorn: impl FnOnce(T) -> Option<Unicorn>,
    ) -> Self {
        let outcome = match result {
            Ok(value) => Outcome::Ok {
                unicorn: unicorn(value),
            },
            Err(err) => {
                tracing::debug!(?step, error = %err, "Step failed");
                Outcome::Failed {
                    error: err.to_string(),
                }
            }
        };
        Self { step, outcome }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Ok { .. })
    }
}

/// Runs the Sprinkles walkthrough against `repo`.
///
/// Creates Sprinkles, reads it back, replaces it with Sparkles under the same
/// identity, deletes it, then reads it again. The last step is expected to
/// fail with a not-found error.
pub fn run(repo: &mut dyn CrudRepository<Unicorn>) -> Vec<StepReport> {
    let mut reports = Vec::with_capacity(5);

    let sprinkles = Unicorn::new("Sprinkles", 5, "Pink", 10.0);
    let created = repo.create(sprinkles);
    let id = created.as_ref().ok().and_then(|u| u.id()).unwrap_or(0);
    reports.push(StepReport::new(Step::Create, created, Some));

    reports.push(StepReport::new(Step::Retrieve, repo.get_by_id(id), Some));

    let sparkles = Unicorn::new("Sparkles", 6, "Blue", 12.0).with_id(id);
    reports.push(StepReport::new(Step::Update, repo.update(sparkles), Some));

    let deleted = repo
        .get_by_id(id)
        .and_then(|unicorn| repo.delete(&unicorn));
    reports.push(StepReport::new(Step::Delete, deleted, |()| None));

    reports.push(StepReport::new(
        Step::RetrieveDeleted,
        repo.get_by_id(id),
        Some,
    ));

    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;

    #[test]
    fn test_run_on_empty_store() {
        let mut repo: InMemoryRepository<Unicorn> = InMemoryRepository::new();

        let reports = run(&mut repo);

        let steps: Vec<_> = reports.iter().map(|r| r.step).collect();
        assert_eq!(
            steps,
            vec![
                Step::Create,
                Step::Retrieve,
                Step::Update,
                Step::Delete,
                Step::RetrieveDeleted
            ]
        );
        assert!(reports[..4].iter().all(StepReport::is_ok));
        assert_eq!(
            reports[0].outcome,
            Outcome::Ok {
                unicorn: Some(Unicorn::new("Sprinkles", 5, "Pink", 10.0).with_id(1))
            }
        );
        assert_eq!(
            reports[2].outcome,
            Outcome::Ok {
                unicorn: Some(Unicorn::new("Sparkles", 6, "Blue", 12.0).with_id(1))
            }
        );
        assert_eq!(
            reports[4].outcome,
            Outcome::Failed {
                error: "Unicorn not found: 1".to_string()
            }
        );
        assert!(repo.is_empty());
    }

    #[test]
    fn test_run_continues_after_failed_create() {
        struct Broken;

        impl CrudRepository<Unicorn> for Broken {
            fn create(&mut self, _: Unicorn) -> herd_core::storage::Result<Unicorn> {
                Err(herd_core::storage::DaoError::CreationFailed {
                    entity_type: "Unicorn",
                    reason: "no ID obtained".to_string(),
                })
            }
            fn get_by_id(&self, id: i32) -> herd_core::storage::Result<Unicorn> {
                Err(herd_core::storage::DaoError::NotFound {
                    entity_type: "Unicorn",
                    id,
                })
            }
            fn get_all(&self) -> herd_core::storage::Result<Vec<Unicorn>> {
                Ok(Vec::new())
            }
            fn update(&mut self, unicorn: Unicorn) -> herd_core::storage::Result<Unicorn> {
                Ok(unicorn)
            }
            fn delete(&mut self, _: &Unicorn) -> herd_core::storage::Result<()> {
                Ok(())
            }
        }

        let reports = run(&mut Broken);

        assert_eq!(reports.len(), 5);
        assert!(!reports[0].is_ok());
        assert_eq!(
            reports[1].outcome,
            Outcome::Failed {
                error: "Unicorn not found: 0".to_string()
            }
        );
    }

    #[test]
    fn test_report_json_shape() {
        let report = StepReport {
            step: Step::RetrieveDeleted,
            outcome: Outcome::Failed {
                error: "Unicorn not found: 1".to_string(),
            },
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "step": "retrieve_deleted",
                "status": "failed",
                "error": "Unicorn not found: 1"
            })
        );
    }
}
