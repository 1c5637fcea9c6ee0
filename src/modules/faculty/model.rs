use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct FacultyMember {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub department: String,
    pub email: String,
    pub office: String,
    pub bio: String,
}

/// Sort orders accepted by the list page. Unknown keys fall back to the
/// default rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Department,
    Name,
    Title,
}

impl SortKey {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("name") => SortKey::Name,
            Some("title") => SortKey::Title,
            _ => SortKey::Department,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Department => "department",
            SortKey::Name => "name",
            SortKey::Title => "title",
        }
    }
}

/// Query parameters for the list page.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
}

/// In-memory faculty collection shared across requests.
#[derive(Debug, Clone)]
pub struct FacultyDirectory {
    members: Arc<Vec<FacultyMember>>,
}

impl FacultyDirectory {
    pub fn new(members: Vec<FacultyMember>) -> Self {
        Self {
            members: Arc::new(members),
        }
    }

    /// The directory the application boots with.
    pub fn seeded() -> Self {
        fn member(
            name: &str,
            title: &str,
            department: &str,
            email: &str,
            office: &str,
            bio: &str,
        ) -> FacultyMember {
            FacultyMember {
                id: Uuid::new_v4(),
                name: name.to_string(),
                title: title.to_string(),
                department: department.to_string(),
                email: email.to_string(),
                office: office.to_string(),
                bio: bio.to_string(),
            }
        }

        Self::new(vec![
            member(
                "Priya Raman",
                "Professor",
                "Computer Science",
                "p.raman@university.edu",
                "CS 412",
                "Works on programming languages and verified compilation.",
            ),
            member(
                "Daniel Whitfield",
                "Lecturer",
                "Computer Science",
                "d.whitfield@university.edu",
                "CS 118",
                "Teaches the introductory systems sequence.",
            ),
            member(
                "Elena Vasquez",
                "Associate Professor",
                "History",
                "e.vasquez@university.edu",
                "HUM 230",
                "Studies early modern Atlantic trade networks.",
            ),
            member(
                "Marcus Bell",
                "Professor",
                "History",
                "m.bell@university.edu",
                "HUM 301",
                "Writes on urban history and public memory.",
            ),
            member(
                "Henry Okonkwo",
                "Professor",
                "Mathematics",
                "h.okonkwo@university.edu",
                "MATH 520",
                "Researches stochastic processes and their applications.",
            ),
            member(
                "Sofia Lindqvist",
                "Assistant Professor",
                "Mathematics",
                "s.lindqvist@university.edu",
                "MATH 204",
                "Focuses on combinatorics and graph theory.",
            ),
        ])
    }

    pub fn members(&self) -> &[FacultyMember] {
        &self.members
    }

    pub fn by_id(&self, id: Uuid) -> Option<&FacultyMember> {
        self.members.iter().find(|m| m.id == id)
    }
}
