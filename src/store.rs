use crate::error::Result;
use crate::model::{Course, CourseId, Enrollment, Student, StudentId};
use sqlx::any::{AnyConnectOptions, AnyRow};
use sqlx::{Any, AnyConnection, Connection, Row, Transaction};
use std::str::FromStr;
use std::sync::Once;
use tracing::{debug, info};

static INSTALL_DRIVERS: Once = Once::new();

/// Relational persistence for students, courses, and enrollments.
///
/// Enrollments are kept as explicit (student_id, course_id) join rows; the
/// `enrolled` vectors on the records are filled in from that table at load
/// time.
pub struct Store {
    conn: AnyConnection,
}

impl Store {
    pub async fn connect(url: &str) -> Result<Self> {
        INSTALL_DRIVERS.call_once(sqlx::any::install_default_drivers);
        let mut conn = AnyConnection::connect_with(&AnyConnectOptions::from_str(url)?).await?;
        if url.starts_with("sqlite") {
            // SQLite leaves foreign keys off unless asked per connection.
            sqlx::query("PRAGMA foreign_keys = ON")
                .execute(&mut conn)
                .await?;
        }
        debug!(url, "connected to database");
        Ok(Self { conn })
    }

    /// Create the schema when it does not exist yet. The DDL sticks to the
    /// subset understood by both supported backends; a production MySQL
    /// database may equally well be provisioned externally.
    pub async fn migrate(&mut self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY,
                name VARCHAR(100) NOT NULL CHECK (length(name) > 0),
                max_courses INTEGER NOT NULL
            )",
        )
        .execute(&mut self.conn)
        .await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS courses (
                id INTEGER PRIMARY KEY,
                name VARCHAR(100) NOT NULL CHECK (length(name) > 0),
                max_students INTEGER NOT NULL
            )",
        )
        .execute(&mut self.conn)
        .await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS enrollments (
                student_id INTEGER NOT NULL REFERENCES students(id),
                course_id INTEGER NOT NULL REFERENCES courses(id),
                PRIMARY KEY (student_id, course_id)
            )",
        )
        .execute(&mut self.conn)
        .await?;
        info!("database schema is up to date");
        Ok(())
    }

    pub async fn begin(&mut self) -> Result<Transaction<'_, Any>> {
        Ok(self.conn.begin().await?)
    }

    pub async fn insert_student(&mut self, name: &str, max_courses: i64) -> Result<Student> {
        let result = sqlx::query("INSERT INTO students (name, max_courses) VALUES (?, ?)")
            .bind(name)
            .bind(max_courses)
            .execute(&mut self.conn)
            .await?;
        let id = result
            .last_insert_id()
            .ok_or_else(|| sqlx::Error::Protocol("driver reported no insert id".into()))?;
        Ok(Student {
            id: StudentId(id),
            name: name.to_owned(),
            max_courses,
            enrolled: Vec::new(),
        })
    }

    pub async fn insert_course(&mut self, name: &str, max_students: i64) -> Result<Course> {
        let result = sqlx::query("INSERT INTO courses (name, max_students) VALUES (?, ?)")
            .bind(name)
            .bind(max_students)
            .execute(&mut self.conn)
            .await?;
        let id = result
            .last_insert_id()
            .ok_or_else(|| sqlx::Error::Protocol("driver reported no insert id".into()))?;
        Ok(Course {
            id: CourseId(id),
            name: name.to_owned(),
            max_students,
            enrolled: Vec::new(),
        })
    }

    pub async fn students(&mut self) -> Result<Vec<Student>> {
        let mut students = sqlx::query("SELECT id, name, max_courses FROM students ORDER BY id")
            .map(|row: AnyRow| Student {
                id: StudentId(row.get("id")),
                name: row.get("name"),
                max_courses: row.get("max_courses"),
                enrolled: Vec::new(),
            })
            .fetch_all(&mut self.conn)
            .await?;
        let enrollments = self.enrollments().await?;
        for student in &mut students {
            student.enrolled = enrollments
                .iter()
                .filter(|e| e.student_id == student.id)
                .map(|e| e.course_id)
                .collect();
        }
        Ok(students)
    }

    pub async fn courses(&mut self) -> Result<Vec<Course>> {
        let mut courses = sqlx::query("SELECT id, name, max_students FROM courses ORDER BY id")
            .map(|row: AnyRow| Course {
                id: CourseId(row.get("id")),
                name: row.get("name"),
                max_students: row.get("max_students"),
                enrolled: Vec::new(),
            })
            .fetch_all(&mut self.conn)
            .await?;
        let enrollments = self.enrollments().await?;
        for course in &mut courses {
            course.enrolled = enrollments
                .iter()
                .filter(|e| e.course_id == course.id)
                .map(|e| e.student_id)
                .collect();
        }
        Ok(courses)
    }

    pub async fn enrollments(&mut self) -> Result<Vec<Enrollment>> {
        Ok(
            sqlx::query("SELECT student_id, course_id FROM enrollments")
                .map(|row: AnyRow| Enrollment {
                    student_id: StudentId(row.get("student_id")),
                    course_id: CourseId(row.get("course_id")),
                })
                .fetch_all(&mut self.conn)
                .await?,
        )
    }
}

/// Load one student and its enrollment set. Takes a bare connection so it can
/// run inside a transaction.
pub(crate) async fn fetch_student(
    conn: &mut AnyConnection,
    id: StudentId,
) -> Result<Option<Student>> {
    let Some(row) = sqlx::query("SELECT name, max_courses FROM students WHERE id = ?")
        .bind(id.0)
        .fetch_optional(&mut *conn)
        .await?
    else {
        return Ok(None);
    };
    let enrolled = sqlx::query("SELECT course_id FROM enrollments WHERE student_id = ?")
        .bind(id.0)
        .map(|row: AnyRow| CourseId(row.get("course_id")))
        .fetch_all(&mut *conn)
        .await?;
    Ok(Some(Student {
        id,
        name: row.get("name"),
        max_courses: row.get("max_courses"),
        enrolled,
    }))
}

/// Load one course and its enrollment set.
pub(crate) async fn fetch_course(
    conn: &mut AnyConnection,
    id: CourseId,
) -> Result<Option<Course>> {
    let Some(row) = sqlx::query("SELECT name, max_students FROM courses WHERE id = ?")
        .bind(id.0)
        .fetch_optional(&mut *conn)
        .await?
    else {
        return Ok(None);
    };
    let enrolled = sqlx::query("SELECT student_id FROM enrollments WHERE course_id = ?")
        .bind(id.0)
        .map(|row: AnyRow| StudentId(row.get("student_id")))
        .fetch_all(&mut *conn)
        .await?;
    Ok(Some(Course {
        id,
        name: row.get("name"),
        max_students: row.get("max_students"),
        enrolled,
    }))
}

pub(crate) async fn insert_enrollment(
    conn: &mut AnyConnection,
    student_id: StudentId,
    course_id: CourseId,
) -> Result<()> {
    sqlx::query("INSERT INTO enrollments (student_id, course_id) VALUES (?, ?)")
        .bind(student_id.0)
        .bind(course_id.0)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
