use ketban_core::RawRecord;

use crate::args::Args;

/// Id given to the person asking for suggestions.
pub const CURRENT_USER_ID: &str = "NEW_USER";

/// The current user's answers as a raw record, ready for the same
/// normalization as the loaded population.
pub fn current_user_record(args: &Args) -> RawRecord {
    RawRecord {
        id: Some(CURRENT_USER_ID.to_string()),
        name: args.name.clone(),
        birth_date: args.birth_date.clone(),
        gender: args.gender.clone(),
        location: args.location.clone(),
        interests: args.interests.clone(),
        profession: args.profession.clone(),
        marital_status: args.marital_status.clone(),
        known_connections: None,
    }
}
