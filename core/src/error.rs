use crate::profile::ProfileId;
use thiserror::Error;

/// Errors raised by graph mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Profile '{0}' already exists in the graph")]
    DuplicateProfile(ProfileId),

    #[error("Current user '{0}' has already been inserted; the graph accepts one insertion")]
    CurrentUserAlreadyInserted(ProfileId),
}
