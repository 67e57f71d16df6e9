use crate::model::{Course, Student};
use std::collections::HashMap;

pub fn display_students(students: &[Student], courses: &[Course]) {
    let names: HashMap<_, _> = courses.iter().map(|c| (c.id, c.name.as_str())).collect();
    let mut students = students.to_vec();
    students.sort_by_key(|s| s.name.clone());
    for student in &students {
        println!(
            "{} [{}] ({}/{} courses):",
            student.name,
            student.id,
            student.enrolled.len(),
            student.max_courses
        );
        let mut enrolled = student
            .enrolled
            .iter()
            .map(|c| names.get(c).copied().unwrap_or("?"))
            .collect::<Vec<_>>();
        enrolled.sort_unstable();
        for name in enrolled {
            println!("  - {name}");
        }
        println!();
    }
}

pub fn display_courses(courses: &[Course], students: &[Student]) {
    let names: HashMap<_, _> = students.iter().map(|s| (s.id, s.name.as_str())).collect();
    let mut courses = courses.to_vec();
    courses.sort_by_key(|c| c.name.clone());
    for course in &courses {
        println!(
            "{} [{}] ({}/{} students):",
            course.name,
            course.id,
            course.enrolled.len(),
            course.max_students
        );
        let mut enrolled = course
            .enrolled
            .iter()
            .map(|s| names.get(s).copied().unwrap_or("?"))
            .collect::<Vec<_>>();
        enrolled.sort_unstable();
        for name in enrolled {
            println!("  - {name}");
        }
        println!();
    }
}
