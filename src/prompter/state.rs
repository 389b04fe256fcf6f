#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockMode {
    #[default]
    Unlocked,
    Locked,
}

impl LockMode {
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Locked)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Unlocked => Self::Locked,
            Self::Locked => Self::Unlocked,
        }
    }

    /// Emergency unlock only ever leaves `Locked`; it never locks.
    pub fn emergency_unlocked(self) -> Self {
        Self::Unlocked
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Unlocked => "Lock Position",
            Self::Locked => "Unlock Position",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    #[default]
    Idle,
    Scrolling,
}

impl ScrollMode {
    pub fn is_scrolling(self) -> bool {
        matches!(self, Self::Scrolling)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Idle => Self::Scrolling,
            Self::Scrolling => Self::Idle,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Start Scrolling",
            Self::Scrolling => "Stop Scrolling",
        }
    }
}

pub fn can_transition(from: LockMode, to: LockMode) -> bool {
    from != to
}
