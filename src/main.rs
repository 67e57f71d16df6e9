use clap::{Parser, Subcommand};
use eyre::Result;
use registrar::config::Config;
use registrar::display;
use registrar::model::{CourseId, StudentId};
use registrar::{EnrollmentService, Store};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Manage student and course enrollments with capacity limits")]
struct Opts {
    /// Use FILE instead of registrar.toml
    #[arg(short, long, value_name = "FILE", default_value = "registrar.toml")]
    config: PathBuf,
    /// Database URL, overriding the configuration file
    #[arg(short, long, value_name = "URL")]
    database_url: Option<String>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the database schema
    Init,
    /// Register a new student
    AddStudent {
        #[arg(long)]
        name: String,
        /// Maximum number of courses the student may take
        #[arg(long)]
        max_courses: i64,
    },
    /// Register a new course
    AddCourse {
        #[arg(long)]
        name: String,
        /// Maximum number of students the course may hold
        #[arg(long)]
        max_students: i64,
    },
    /// Enroll a student in a course
    Enroll {
        #[arg(long)]
        student: i64,
        #[arg(long)]
        course: i64,
    },
    /// List all students with their courses
    ListStudents,
    /// List all courses with their students
    ListCourses,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let opts = Opts::parse();
    let level = match opts.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("registrar={level}"))),
        )
        .init();
    let url = match opts.database_url {
        Some(url) => url,
        None => Config::load(&opts.config)?.database.url,
    };
    let store = Store::connect(&url).await?;
    let mut service = EnrollmentService::new(store);
    // Pending migrations are applied before any command runs.
    service.migrate().await?;
    match opts.command {
        Command::Init => println!("database schema created"),
        Command::AddStudent { name, max_courses } => {
            let student = service.add_student(&name, max_courses).await?;
            println!("added student {} with id {}", student.name, student.id);
        }
        Command::AddCourse { name, max_students } => {
            let course = service.add_course(&name, max_students).await?;
            println!("added course {} with id {}", course.name, course.id);
        }
        Command::Enroll { student, course } => {
            service
                .enroll_student_in_course(StudentId(student), CourseId(course))
                .await?;
            println!("enrolled student {student} in course {course}");
        }
        Command::ListStudents => {
            let students = service.all_students().await?;
            let courses = service.all_courses().await?;
            display::display_students(&students, &courses);
        }
        Command::ListCourses => {
            let students = service.all_students().await?;
            let courses = service.all_courses().await?;
            display::display_courses(&courses, &students);
        }
    }
    Ok(())
}
