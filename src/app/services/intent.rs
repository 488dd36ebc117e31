/// Rough genre guess from the words in a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    CreativeWriting,
    Academic,
    Children,
    General,
}

impl Intent {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CreativeWriting => "Creative writing",
            Self::Academic => "Academic",
            Self::Children => "Children's book",
            Self::General => "General",
        }
    }
}

const CREATIVE_KEYWORDS: &[&str] = &["novel", "story", "epic", "saga", "رواية", "قصة", "ملحمة"];
const ACADEMIC_KEYWORDS: &[&str] = &["research", "study", "scientific", "thesis", "بحث", "دراسة", "علمي"];
const CHILDREN_KEYWORDS: &[&str] = &["children", "kids", "fairy tale", "أطفال", "حكاية"];

/// Classify `text` by keyword, checking creative, academic, then children.
pub fn detect_intent(text: &str) -> Intent {
    let lower = text.to_lowercase();
    let has_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if has_any(CREATIVE_KEYWORDS) {
        Intent::CreativeWriting
    } else if has_any(ACADEMIC_KEYWORDS) {
        Intent::Academic
    } else if has_any(CHILDREN_KEYWORDS) {
        Intent::Children
    } else {
        Intent::General
    }
}
