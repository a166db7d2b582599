use crate::types::DbId;
use crate::validator::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("Edit conflict: {entity} with id {id} was modified concurrently")]
    EditConflict { entity: &'static str, id: DbId },
}
