/// A registered inventory entry as kept in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntity {
    pub id: u64,
    pub inventory_name: String,
    pub description: String,
    pub photo_filename: Option<String>,
}
