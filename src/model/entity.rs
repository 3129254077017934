use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Record collections managed by the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Students,
    Lecturers,
    Departments,
    Majors,
    Courses,
    AcademicClasses,
    ClassSections,
    Enrollments,
    Grades,
    UserAccounts,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown entity '{0}'")]
pub struct UnknownEntity(pub String);

impl Entity {
    pub const ALL: [Entity; 10] = [
        Entity::Students,
        Entity::Lecturers,
        Entity::Departments,
        Entity::Majors,
        Entity::Courses,
        Entity::AcademicClasses,
        Entity::ClassSections,
        Entity::Enrollments,
        Entity::Grades,
        Entity::UserAccounts,
    ];

    /// Path segment under the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Entity::Students => "students",
            Entity::Lecturers => "lecturers",
            Entity::Departments => "departments",
            Entity::Majors => "majors",
            Entity::Courses => "courses",
            Entity::AcademicClasses => "academic_class",
            Entity::ClassSections => "class_section",
            Entity::Enrollments => "enrollment",
            Entity::Grades => "grades",
            Entity::UserAccounts => "user_account",
        }
    }

    /// Primary key field of a record.
    pub fn id_field(self) -> &'static str {
        match self {
            Entity::Students => "student_id",
            Entity::Lecturers => "lecturer_id",
            Entity::Departments => "department_id",
            Entity::Majors => "major_id",
            Entity::Courses => "course_id",
            Entity::AcademicClasses => "academic_class_id",
            Entity::ClassSections => "class_section_id",
            Entity::Enrollments => "enrollment_id",
            Entity::Grades => "grade_id",
            Entity::UserAccounts => "user_id",
        }
    }

    /// Sort field a fresh list view starts with; empty means server order.
    pub fn default_sort(self) -> &'static str {
        match self {
            Entity::Lecturers | Entity::AcademicClasses | Entity::ClassSections => "",
            other => other.id_field(),
        }
    }

    /// Whether the API has a `bulk-delete` route for this collection.
    pub fn supports_bulk_delete(self) -> bool {
        matches!(self, Entity::Students | Entity::Lecturers)
    }

    pub fn label(self) -> &'static str {
        match self {
            Entity::Students => "Students",
            Entity::Lecturers => "Lecturers",
            Entity::Departments => "Departments",
            Entity::Majors => "Majors",
            Entity::Courses => "Courses",
            Entity::AcademicClasses => "Academic classes",
            Entity::ClassSections => "Class sections",
            Entity::Enrollments => "Enrollments",
            Entity::Grades => "Grades",
            Entity::UserAccounts => "User accounts",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Entity {
    type Err = UnknownEntity;

    /// Accepts the API path segment or a plural name ("academic-classes").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let entity = match normalized.as_str() {
            "students" | "student" => Entity::Students,
            "lecturers" | "lecturer" | "teachers" => Entity::Lecturers,
            "departments" | "department" => Entity::Departments,
            "majors" | "major" => Entity::Majors,
            "courses" | "course" => Entity::Courses,
            "academic_class" | "academic_classes" | "classes" => Entity::AcademicClasses,
            "class_section" | "class_sections" => Entity::ClassSections,
            "enrollment" | "enrollments" => Entity::Enrollments,
            "grades" | "grade" => Entity::Grades,
            "user_account" | "user_accounts" | "accounts" => Entity::UserAccounts,
            _ => return Err(UnknownEntity(s.to_string())),
        };
        Ok(entity)
    }
}
