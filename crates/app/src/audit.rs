//! Audit metadata shared by persisted records.

use jiff::Timestamp;

use crate::ids::ActorId;

/// Who created and last updated a record, and when.
///
/// The four fields are populated exclusively by the persistence layer:
/// [`Audit::stamped`] on insert, [`Audit::touch`] on every later write.
/// Business logic reads them but never sets them directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Audit {
    /// Set once on insert; immutable afterwards.
    pub created_at: Timestamp,

    /// Refreshed on every write.
    pub updated_at: Timestamp,

    /// Acting caller at insert time, when known.
    pub created_by: Option<ActorId>,

    /// Acting caller at the most recent write, when known.
    pub updated_by: Option<ActorId>,
}

impl Audit {
    /// Builds the audit block for a record being inserted.
    #[must_use]
    pub fn stamped(actor: Option<ActorId>) -> Self {
        let now = Timestamp::now();

        Self {
            created_at: now,
            updated_at: now,
            created_by: actor,
            updated_by: actor,
        }
    }

    /// Refreshes the update pair for a record being written again.
    ///
    /// The creation pair is left untouched.
    pub fn touch(&mut self, actor: Option<ActorId>) {
        self.updated_at = Timestamp::now();
        self.updated_by = actor;
    }
}

#[cfg(test)]
mod tests {
    use crate::test::helpers;

    use super::*;

    #[test]
    fn stamped_sets_matching_creation_and_update_pairs() {
        let audit = Audit::stamped(helpers::actor(7));

        assert_eq!(audit.created_at, audit.updated_at);
        assert_eq!(audit.created_by, helpers::actor(7));
        assert_eq!(audit.updated_by, helpers::actor(7));
    }

    #[test]
    fn stamped_accepts_anonymous_callers() {
        let audit = Audit::stamped(None);

        assert_eq!(audit.created_by, None);
        assert_eq!(audit.updated_by, None);
    }

    #[test]
    fn touch_refreshes_only_the_update_pair() {
        let mut audit = Audit::stamped(helpers::actor(1));
        let created_at = audit.created_at;

        audit.touch(helpers::actor(2));

        assert_eq!(audit.created_at, created_at);
        assert_eq!(audit.created_by, helpers::actor(1));
        assert_eq!(audit.updated_by, helpers::actor(2));
        assert!(audit.updated_at >= audit.created_at);
    }
}
