use crate::error::{RegistrarError, Result};
use crate::model::{self, Course, CourseId, Enrollment, Student, StudentId};
use crate::store::{self, Store};
use tracing::info;

/// Mediates between students and courses, enforcing both capacity limits
/// inside a single database transaction.
pub struct EnrollmentService {
    store: Store,
}

impl EnrollmentService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn migrate(&mut self) -> Result<()> {
        self.store.migrate().await
    }

    pub async fn add_student(&mut self, name: &str, max_courses: i64) -> Result<Student> {
        model::validate_name(name)?;
        model::validate_capacity(max_courses)?;
        let student = self.store.insert_student(name, max_courses).await?;
        info!(id = %student.id, name, max_courses, "added student");
        Ok(student)
    }

    pub async fn add_course(&mut self, name: &str, max_students: i64) -> Result<Course> {
        model::validate_name(name)?;
        model::validate_capacity(max_students)?;
        let course = self.store.insert_course(name, max_students).await?;
        info!(id = %course.id, name, max_students, "added course");
        Ok(course)
    }

    /// Enroll a student in a course, or fail without touching the database.
    ///
    /// The capacity checks and the insert run in one transaction; overshoot
    /// under concurrency is prevented by the backend's isolation (SQLite
    /// serializes writers, MySQL runs repeatable read by default). Dropping
    /// the transaction on any error path rolls it back. A duplicate
    /// enrollment is reported as an error rather than silently ignored.
    pub async fn enroll_student_in_course(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<Enrollment> {
        let mut tx = self.store.begin().await?;
        let student = store::fetch_student(&mut tx, student_id)
            .await?
            .ok_or(RegistrarError::StudentNotFound(student_id))?;
        let course = store::fetch_course(&mut tx, course_id)
            .await?
            .ok_or(RegistrarError::CourseNotFound(course_id))?;
        if student.is_enrolled_in(course_id) {
            return Err(RegistrarError::AlreadyEnrolled {
                student: student_id,
                course: course_id,
            });
        }
        if course.is_full() {
            return Err(RegistrarError::CourseFull {
                name: course.name,
                max_students: course.max_students,
            });
        }
        if student.at_course_limit() {
            return Err(RegistrarError::StudentAtCourseLimit {
                name: student.name,
                max_courses: student.max_courses,
            });
        }
        store::insert_enrollment(&mut tx, student_id, course_id).await?;
        tx.commit().await?;
        info!(student = %student_id, course = %course_id, "enrolled student");
        Ok(Enrollment {
            student_id,
            course_id,
        })
    }

    pub async fn all_students(&mut self) -> Result<Vec<Student>> {
        self.store.students().await
    }

    pub async fn all_courses(&mut self) -> Result<Vec<Course>> {
        self.store.courses().await
    }

    pub async fn all_enrollments(&mut self) -> Result<Vec<Enrollment>> {
        self.store.enrollments().await
    }
}
