/// Case-insensitive substring filter applied to branch names.
#[derive(Debug, Clone, Default)]
pub struct BranchFilter {
    raw: String,
    needle: String,
}

impl BranchFilter {
    pub fn new(search: &str) -> Self {
        BranchFilter {
            raw: search.to_string(),
            needle: search.to_lowercase(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }

    /// `" matching '<search>'"` when active, empty otherwise.
    pub fn suffix(&self) -> String {
        if self.is_active() {
            format!(" matching '{}'", self.raw)
        } else {
            String::new()
        }
    }
}
