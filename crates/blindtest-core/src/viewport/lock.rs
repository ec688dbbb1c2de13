use super::engine::DisplayContext;

/// The two user-facing "move together" switches.
///
/// `global` belongs to the single-image expand modal and `compare` to the
/// compare modal. Only one of them is ever consulted, chosen by
/// [`LockFlags::resolve`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockFlags {
    pub global: bool,
    pub compare: bool,
}

/// Which lock, if any, governs the active display context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LockContext {
    #[default]
    None,
    Global,
    Compare,
}

impl LockContext {
    /// True when mutations broadcast to every viewport.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl LockFlags {
    pub fn resolve(&self, display: &DisplayContext) -> LockContext {
        match display {
            DisplayContext::Grid => LockContext::None,
            DisplayContext::Expand(_) if self.global => LockContext::Global,
            DisplayContext::Compare(_) if self.compare => LockContext::Compare,
            _ => LockContext::None,
        }
    }
}

impl std::fmt::Display for LockContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "Unlocked"),
            Self::Global => write!(f, "Global lock"),
            Self::Compare => write!(f, "Compare lock"),
        }
    }
}
