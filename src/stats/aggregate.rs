use crate::model::{AuthorRecord, AuthorTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Commits,
    Delta,
    Added,
    Deleted,
    Files,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Name,
        Column::Commits,
        Column::Delta,
        Column::Added,
        Column::Deleted,
        Column::Files,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Commits => "commits",
            Column::Delta => "delta",
            Column::Added => "(+)",
            Column::Deleted => "(-)",
            Column::Files => "files",
        }
    }

    /// Text printed for `record` in this column.
    pub fn cell(self, record: &AuthorRecord) -> String {
        match self {
            Column::Name => record.name.clone(),
            Column::Commits => record.commits.to_string(),
            Column::Delta => record.delta.to_string(),
            Column::Added => record.added.to_string(),
            Column::Deleted => record.deleted.to_string(),
            Column::Files => record.files.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths([usize; 6]);

impl ColumnWidths {
    fn from_labels() -> Self {
        let mut widths = [0; 6];
        for (slot, column) in widths.iter_mut().zip(Column::ALL) {
            *slot = text_width(column.label());
        }
        Self(widths)
    }

    fn widen(&mut self, record: &AuthorRecord) {
        for (slot, column) in self.0.iter_mut().zip(Column::ALL) {
            *slot = (*slot).max(text_width(&column.cell(record)));
        }
    }

    pub fn get(&self, column: Column) -> usize {
        self.0[column as usize]
    }
}

/// Width in characters, matching how `format!` pads.
fn text_width(text: &str) -> usize {
    text.chars().count()
}

#[derive(Debug, Clone)]
pub struct Report {
    pub authors: Vec<AuthorRecord>,
    pub widths: ColumnWidths,
}

/// Finalizes every author, sizes the columns and orders rows by `commits`,
/// highest first. Equal counts keep the order authors first appeared in.
pub fn aggregate(table: AuthorTable) -> Report {
    let mut authors: Vec<AuthorRecord> = table.into_records().collect();

    let mut widths = ColumnWidths::from_labels();
    for record in &authors {
        widths.widen(record);
    }

    authors.sort_by(|a, b| b.commits.cmp(&a.commits));
    log::debug!("Aggregated {} authors", authors.len());

    Report { authors, widths }
}
