use super::CourseId;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct StudentId(pub i64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Maximum number of courses this student may be enrolled in.
    pub max_courses: i64,
    /// Courses the student is currently enrolled in, loaded from the
    /// join table.
    pub enrolled: Vec<CourseId>,
}

impl Student {
    pub fn is_enrolled_in(&self, course: CourseId) -> bool {
        self.enrolled.contains(&course)
    }

    pub fn at_course_limit(&self) -> bool {
        self.enrolled.len() as i64 >= self.max_courses
    }
}
