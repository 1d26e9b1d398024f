/// Which branch a reconciliation took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Record already linked by external id was refreshed
    Updated,
    /// Pre-existing record matched by email was linked to the provider
    Linked,
    /// No match; a new record was created
    Created,
}

impl ReconcileOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::Linked => "linked",
            Self::Created => "created",
        }
    }
}

impl std::fmt::Display for ReconcileOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
