/// Why the engine declined a request. The state is always left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// the move breaks a placement rule
    IllegalMove,
    /// the cards are not a liftable face-up tail of their pile
    InvalidSelection,
    /// nothing to undo
    EmptyHistory,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalMove => write!(f, "illegal move"),
            Self::InvalidSelection => write!(f, "invalid selection"),
            Self::EmptyHistory => write!(f, "nothing to undo"),
        }
    }
}

impl std::error::Error for Rejection {}
