use super::StudentId;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct CourseId(pub i64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    /// Maximum number of students this course may hold.
    pub max_students: i64,
    /// Students currently enrolled, loaded from the join table.
    pub enrolled: Vec<StudentId>,
}

impl Course {
    pub fn is_full(&self) -> bool {
        self.enrolled.len() as i64 >= self.max_students
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_fullness() {
        let mut course = Course {
            id: CourseId(1),
            name: "dummy".into(),
            max_students: 2,
            enrolled: Vec::new(),
        };
        assert!(!course.is_full());
        course.enrolled.push(StudentId(1));
        assert!(!course.is_full());
        course.enrolled.push(StudentId(2));
        assert!(course.is_full());
    }

    #[test]
    fn zero_capacity_course_is_always_full() {
        let course = Course {
            id: CourseId(1),
            name: "dummy".into(),
            max_students: 0,
            enrolled: Vec::new(),
        };
        assert!(course.is_full());
    }
}
