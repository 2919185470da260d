//! Scene mode.

/// Visual mode of the whole scene.
///
/// Owned by a single controller and handed by value to every subsystem that
/// needs to switch behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Objects visible and floating, stars twinkling.
    #[default]
    Idle,
    /// Everything is being pulled into the black hole.
    Collapsing,
}

impl Mode {
    /// Whether the black hole is currently pulling things in.
    pub fn is_collapsing(self) -> bool {
        self == Mode::Collapsing
    }

    /// Label used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Collapsing => "collapsing",
        }
    }
}
