use crate::model::{CourseId, StudentId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrarError {
    #[error("student {0} not found")]
    StudentNotFound(StudentId),

    #[error("course {0} not found")]
    CourseNotFound(CourseId),

    #[error("course {name} is full ({max_students} students)")]
    CourseFull { name: String, max_students: i64 },

    #[error("student {name} is already taking the maximum of {max_courses} courses")]
    StudentAtCourseLimit { name: String, max_courses: i64 },

    #[error("student {student} is already enrolled in course {course}")]
    AlreadyEnrolled {
        student: StudentId,
        course: CourseId,
    },

    #[error("invalid name {0:?}: must be non-empty and at most 100 characters")]
    InvalidName(String),

    #[error("invalid capacity {0}: must not be negative")]
    InvalidCapacity(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, RegistrarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_side() {
        let err = RegistrarError::CourseFull {
            name: "Databases".into(),
            max_students: 1,
        };
        assert_eq!(err.to_string(), "course Databases is full (1 students)");
        let err = RegistrarError::StudentNotFound(StudentId(42));
        assert_eq!(err.to_string(), "student 42 not found");
    }
}
