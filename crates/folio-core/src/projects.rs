use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub demo_url: &'static str,
    pub source_url: &'static str,
}

#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    records: BTreeMap<u32, ProjectRecord>,
}

const BUILTIN_PROJECTS: [ProjectRecord; 4] = [
    ProjectRecord {
        id: 1,
        title: "Terminal Based Portfolio",
        description: "An interactive portfolio that showcases my skills and projects in a terminal-like interface.",
        tech: &["HTML", "CSS", "JavaScript"],
        demo_url: "https://rajvikash18113.github.io",
        source_url: "https://github.com/rajvikash18113",
    },
    ProjectRecord {
        id: 2,
        title: "Smart Stock Portfolio Optimizer",
        description: "A web application that helps users manage their stock portfolios efficiently.",
        tech: &["React", "Node.js", "MongoDB"],
        demo_url: "https://rajvikash18113.github.io",
        source_url: "https://github.com/rajvikash18113",
    },
    ProjectRecord {
        id: 3,
        title: "Daily Task Tracker",
        description: "A simple task management app to keep track of daily tasks.",
        tech: &["JavaScript", "LocalStorage"],
        demo_url: "https://rajvikash18113.github.io",
        source_url: "https://github.com/rajvikash18113",
    },
    ProjectRecord {
        id: 4,
        title: "Profile Card",
        description: "A simple profile card that showcases your social profiles.",
        tech: &["HTML", "CSS"],
        demo_url: "https://rajvikash18113.github.io",
        source_url: "https://github.com/rajvikash18113",
    },
];

impl ProjectCatalog {
    pub fn builtin() -> Self {
        Self::from_records(BUILTIN_PROJECTS)
    }

    pub fn from_records(records: impl IntoIterator<Item = ProjectRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&ProjectRecord> {
        self.records.get(&id)
    }

    /// Resolves a raw `project` argument. Only the exact text of a known id
    /// matches, so `02` or `+2` yield `None`.
    pub fn resolve(&self, arg: Option<&str>) -> Option<&ProjectRecord> {
        let raw = arg?;
        let id = raw.parse::<u32>().ok()?;
        if id.to_string() != raw {
            return None;
        }
        self.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_ids_are_in_order() {
        let ids: Vec<u32> = ProjectCatalog::builtin().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn resolve_rejects_unknown_and_malformed_ids() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(
            catalog.resolve(Some("2")).map(|r| r.title),
            Some("Smart Stock Portfolio Optimizer")
        );
        assert!(catalog.resolve(Some("9")).is_none());
        assert!(catalog.resolve(Some("-1")).is_none());
        assert!(catalog.resolve(Some("two")).is_none());
        assert!(catalog.resolve(Some("+2")).is_none());
        assert!(catalog.resolve(Some("02")).is_none());
        assert!(catalog.resolve(Some("0002")).is_none());
        assert!(catalog.resolve(Some(" 2")).is_none());
        assert!(catalog.resolve(None).is_none());
    }
}
