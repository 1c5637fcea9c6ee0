use uuid::Uuid;

use super::model::{FacultyDirectory, FacultyMember, SortKey};

pub struct FacultyService;

impl FacultyService {
    /// Members ordered by the requested key. Department and title sorts use
    /// the member name as the secondary order so listings are stable.
    pub fn list_sorted(directory: &FacultyDirectory, sort_by: SortKey) -> Vec<FacultyMember> {
        let mut members = directory.members().to_vec();

        match sort_by {
            SortKey::Name => members.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Title => {
                members.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.name.cmp(&b.name)))
            }
            SortKey::Department => members.sort_by(|a, b| {
                a.department
                    .cmp(&b.department)
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }

        members
    }

    pub fn get(directory: &FacultyDirectory, id: Uuid) -> Option<FacultyMember> {
        directory.by_id(id).cloned()
    }
}
