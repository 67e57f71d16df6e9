pub use self::course::{Course, CourseId};
pub use self::student::{Student, StudentId};

use crate::error::RegistrarError;

mod course;
mod student;

pub const MAX_NAME_LEN: usize = 100;

/// A student/course pair recorded in the join table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Enrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

/// Names are required and bounded by the schema (non-empty, at most 100
/// characters). Checked here as well so that a bad name fails before
/// reaching the database.
pub fn validate_name(name: &str) -> Result<(), RegistrarError> {
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(RegistrarError::InvalidName(name.to_owned()));
    }
    Ok(())
}

pub fn validate_capacity(capacity: i64) -> Result<(), RegistrarError> {
    if capacity < 0 {
        return Err(RegistrarError::InvalidCapacity(capacity));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_must_be_non_empty_and_bounded() {
        assert!(validate_name("Ada Lovelace").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"x".repeat(100)).is_ok());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn capacity_must_be_non_negative() {
        assert!(validate_capacity(0).is_ok());
        assert!(validate_capacity(30).is_ok());
        assert!(validate_capacity(-1).is_err());
    }
}
