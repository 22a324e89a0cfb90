/// A note as it is stored in the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub description: String,
}
