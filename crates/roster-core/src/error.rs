use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    /// Display is the bare detail string clients match on; the name is kept for logs.
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("Student {email} is already signed up for {activity}")]
    AlreadySignedUp { email: String, activity: String },

    #[error("Student {email} is not signed up for {activity}")]
    NotSignedUp { email: String, activity: String },

    #[error("duplicate activity in seed: {0}")]
    DuplicateActivity(String),

    #[error("duplicate participant '{email}' in seed activity '{activity}'")]
    DuplicateParticipant { email: String, activity: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Coarse classification used by transports to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Invalid,
    Internal,
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::ActivityNotFound(_) => ErrorKind::NotFound,
            RosterError::AlreadySignedUp { .. } | RosterError::NotSignedUp { .. } => {
                ErrorKind::Conflict
            }
            RosterError::DuplicateActivity(_)
            | RosterError::DuplicateParticipant { .. }
            | RosterError::Yaml(_) => ErrorKind::Invalid,
            RosterError::Io(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
