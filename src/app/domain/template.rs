//! Built-in writing templates offered when a new book is started.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(pub &'static str);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    New,
    Premium,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Premium => "Premium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub badge: Option<Badge>,
    pub prompts: &'static [&'static str],
}

pub const TEMPLATES: &[Template] = &[
    Template {
        id: TemplateId("epic-weaver"),
        name: "Epic Weaver",
        description: "Novels and epic stories",
        category: "Creative",
        badge: Some(Badge::New),
        prompts: &[
            "Write a gripping epic opening",
            "Develop the main characters",
            "Set up a dramatic conflict",
        ],
    },
    Template {
        id: TemplateId("scholar-forge"),
        name: "Scholar Forge",
        description: "Research and academic books",
        category: "Academic",
        badge: None,
        prompts: &[
            "Open with a strong academic introduction",
            "Write the literature review",
            "Analyse the data and findings",
        ],
    },
    Template {
        id: TemplateId("sacred-script"),
        name: "Sacred Script",
        description: "Religious and spiritual books",
        category: "Religious",
        badge: Some(Badge::Premium),
        prompts: &[
            "Write a spiritual introduction",
            "Cite verses and sayings",
            "Connect the texts with everyday life",
        ],
    },
    Template {
        id: TemplateId("wonder-land"),
        name: "Wonder Land",
        description: "Stories and books for children",
        category: "Children",
        badge: None,
        prompts: &[
            "Begin with \"Once upon a time\"",
            "Create characters children will love",
            "Write a happy ending with a lesson",
        ],
    },
    Template {
        id: TemplateId("legacy-forge"),
        name: "Legacy Forge",
        description: "Biographies and memoirs",
        category: "Personal",
        badge: None,
        prompts: &[
            "Write about childhood memories",
            "Describe the challenges and achievements",
            "Share the wisdom and lessons learned",
        ],
    },
    Template {
        id: TemplateId("world-builder"),
        name: "World Builder",
        description: "Complete fictional worlds",
        category: "Science fiction",
        badge: Some(Badge::New),
        prompts: &[
            "Design a new world",
            "Create a political and social order",
            "Develop its technologies and cultures",
        ],
    },
];

impl Template {
    /// One-line summary for the picker list.
    pub fn picker_line(&self) -> String {
        match self.badge {
            Some(badge) => format!("{} [{}] - {}", self.name, badge.label(), self.description),
            None => format!("{} - {}", self.name, self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_ids_are_unique() {
        let ids: HashSet<_> = TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TEMPLATES.len());
        assert_eq!(TEMPLATES.len(), 6);
    }

    #[test]
    fn test_every_template_has_prompts() {
        for t in TEMPLATES {
            assert!(!t.prompts.is_empty(), "{} has no prompts", t.name);
        }
    }

    #[test]
    fn test_picker_line_shows_badge() {
        let epic = &TEMPLATES[0];
        assert_eq!(epic.id, TemplateId("epic-weaver"));
        assert_eq!(epic.picker_line(), "Epic Weaver [New] - Novels and epic stories");
        let scholar = &TEMPLATES[1];
        assert!(!scholar.picker_line().contains('['));
    }
}
