//! Lifecycle phases of a managed resource.
//!
//! ```text
//! Absent --create--> Creating --ok--> Present
//! Present --diff(update)--> Updating --ok--> Present
//! Present --diff(replace)--> Replacing: Deleting --ok--> Absent --> Creating
//! Present --delete--> Deleting --ok--> Absent
//! Present --read(gone)--> Absent
//! ```

use serde::Serialize;
use webflow_domain::DiffResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourcePhase {
    Absent,
    Creating,
    Present,
    Updating,
    Replacing,
    Deleting,
}

impl ResourcePhase {
    /// Phase the engine enters next, given stored state and a diff.
    pub fn plan(has_state: bool, diff: &DiffResult) -> Self {
        if !has_state {
            Self::Creating
        } else if diff.forces_replacement {
            Self::Replacing
        } else if diff.has_changes {
            Self::Updating
        } else {
            Self::Present
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_from_diff() {
        assert_eq!(ResourcePhase::plan(false, &DiffResult::no_changes()), ResourcePhase::Creating);
        assert_eq!(ResourcePhase::plan(true, &DiffResult::no_changes()), ResourcePhase::Present);
        assert_eq!(
            ResourcePhase::plan(true, &DiffResult::update(vec!["displayName".into()])),
            ResourcePhase::Updating
        );
        assert_eq!(ResourcePhase::plan(true, &DiffResult::replace("siteId")), ResourcePhase::Replacing);
    }
}
