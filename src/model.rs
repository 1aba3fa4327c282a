use indexmap::{IndexMap, IndexSet};

/// Line count reported by `git log --numstat` for one side of a file change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCount {
    Lines(u64),
    /// `-` marker git emits for binary files.
    Binary,
}

impl LineCount {
    pub fn value(self) -> u64 {
        match self {
            LineCount::Lines(n) => n,
            LineCount::Binary => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub added: LineCount,
    pub deleted: LineCount,
    pub path: String,
}

/// Running totals for one author email while the log is being parsed.
#[derive(Debug, Clone, Default)]
pub struct AuthorAccum {
    pub name: String,
    pub commits: u64,
    pub added: u64,
    pub deleted: u64,
    pub paths: IndexSet<String>,
}

impl AuthorAccum {
    pub fn new(name: String) -> Self {
        Self { name, ..Self::default() }
    }

    pub fn add_change(&mut self, change: FileChange) {
        self.commits = self.commits.saturating_add(1);
        self.added = self.added.saturating_add(change.added.value());
        self.deleted = self.deleted.saturating_add(change.deleted.value());
        self.paths.insert(change.path);
    }

    /// Drops the path set and freezes the derived fields.
    pub fn finish(self, email: String) -> AuthorRecord {
        AuthorRecord {
            delta: i128::from(self.added) - i128::from(self.deleted),
            files: self.paths.len() as u64,
            name: self.name,
            email,
            commits: self.commits,
            added: self.added,
            deleted: self.deleted,
        }
    }
}

/// Final per-author statistics, one per distinct email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub name: String,
    pub email: String,
    pub commits: u64,
    pub added: u64,
    pub deleted: u64,
    /// `added - deleted`, wide enough for any pair of `u64` sums.
    pub delta: i128,
    pub files: u64,
}

/// Authors keyed by email, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct AuthorTable {
    authors: IndexMap<String, AuthorAccum>,
}

impl AuthorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulator for `email`, creating a zeroed one on first sight.
    /// The display name is overwritten either way so the latest one wins.
    pub fn entry_for(&mut self, name: &str, email: &str) -> &mut AuthorAccum {
        let accum = self
            .authors
            .entry(email.to_string())
            .or_insert_with(|| AuthorAccum::new(name.to_string()));
        accum.name = name.to_string();
        accum
    }

    pub fn get(&self, email: &str) -> Option<&AuthorAccum> {
        self.authors.get(email)
    }

    pub fn get_mut(&mut self, email: &str) -> Option<&mut AuthorAccum> {
        self.authors.get_mut(email)
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    pub fn into_records(self) -> impl Iterator<Item = AuthorRecord> {
        self.authors
            .into_iter()
            .map(|(email, accum)| accum.finish(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn change(added: LineCount, deleted: LineCount, path: &str) -> FileChange {
        FileChange { added, deleted, path: path.to_string() }
    }

    #[test]
    fn binary_counts_as_zero() {
        assert_eq!(LineCount::Binary.value(), 0);
        assert_eq!(LineCount::Lines(7).value(), 7);
    }

    #[test]
    fn entry_for_keeps_latest_name() {
        let mut table = AuthorTable::new();
        table.entry_for("Al", "a@x.com");
        table.entry_for("Alice", "a@x.com");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a@x.com").map(|a| a.name.as_str()), Some("Alice"));
    }

    #[test]
    fn emails_are_case_sensitive() {
        let mut table = AuthorTable::new();
        table.entry_for("Alice", "a@x.com");
        table.entry_for("Alice", "A@x.com");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn finish_derives_files_and_delta() {
        let mut accum = AuthorAccum::new("Bob".into());
        accum.add_change(change(LineCount::Lines(1), LineCount::Lines(4), "a.rs"));
        accum.add_change(change(LineCount::Lines(2), LineCount::Lines(0), "a.rs"));
        accum.add_change(change(LineCount::Binary, LineCount::Binary, "logo.png"));

        let record = accum.finish("b@y.com".into());
        assert_eq!(
            record,
            AuthorRecord {
                name: "Bob".into(),
                email: "b@y.com".into(),
                commits: 3,
                added: 3,
                deleted: 4,
                delta: -1,
                files: 2,
            }
        );
    }

    #[test]
    fn huge_counts_saturate_instead_of_overflowing() {
        let mut accum = AuthorAccum::new("Big".into());
        accum.add_change(change(LineCount::Lines(u64::MAX), LineCount::Lines(0), "a"));
        accum.add_change(change(LineCount::Lines(u64::MAX), LineCount::Lines(1), "b"));

        let record = accum.finish("big@x.com".into());
        assert_eq!(record.added, u64::MAX);
        assert_eq!(record.delta, i128::from(u64::MAX) - 1);
        assert!(record.delta > 0);
    }

    #[test]
    fn records_come_out_in_first_seen_order() {
        let mut table = AuthorTable::new();
        table.entry_for("Zed", "z@x.com");
        table.entry_for("Amy", "a@x.com");
        table.entry_for("Zed", "z@x.com");

        let emails: Vec<_> = table.into_records().map(|r| r.email).collect();
        assert_eq!(emails, vec!["z@x.com", "a@x.com"]);
    }
}
