use crate::constants::{DEFAULT_LANGUAGE, TONE_CATALOG};

/// Requested length of the generated prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PromptLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl PromptLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptLength::Short => "Short",
            PromptLength::Medium => "Medium",
            PromptLength::Long => "Long",
        }
    }

    pub fn next(&self) -> PromptLength {
        match self {
            PromptLength::Short => PromptLength::Medium,
            PromptLength::Medium => PromptLength::Long,
            PromptLength::Long => PromptLength::Short,
        }
    }

    /// Wording guidance passed to the model.
    pub fn guidance(&self) -> &'static str {
        match self {
            PromptLength::Short => "two to three sentences, under 60 words",
            PromptLength::Medium => "one focused paragraph, 60 to 150 words",
            PromptLength::Long => "two to three paragraphs, 150 to 300 words",
        }
    }
}

/// A selectable tone tag in the form
#[derive(Clone, Debug, PartialEq)]
pub struct ToneTag {
    pub name: String,
    pub selected: bool,
}

impl ToneTag {
    pub fn new(name: impl Into<String>) -> Self {
        ToneTag { name: name.into(), selected: false }
    }

    /// The full tag list offered by the form, nothing selected.
    pub fn catalog() -> Vec<ToneTag> {
        TONE_CATALOG.iter().copied().map(ToneTag::new).collect()
    }
}

/// The seven prompt-construction parameters collected by the form.
///
/// This is the payload of one generation request; the network layer turns it
/// into a model instruction (see `crate::prompt`).
#[derive(Clone, Debug, PartialEq)]
pub struct PromptRequest {
    pub role: String,
    pub topic: String,
    pub language: String,
    pub audience: String,
    pub tones: Vec<String>,
    pub length: PromptLength,
    pub special_instructions: String,
}

impl Default for PromptRequest {
    fn default() -> Self {
        PromptRequest {
            role: String::new(),
            topic: String::new(),
            language: String::from(DEFAULT_LANGUAGE),
            audience: String::new(),
            tones: Vec::new(),
            length: PromptLength::default(),
            special_instructions: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_cycle_wraps() {
        let mut length = PromptLength::Short;
        length = length.next();
        assert_eq!(length, PromptLength::Medium);
        length = length.next();
        assert_eq!(length, PromptLength::Long);
        length = length.next();
        assert_eq!(length, PromptLength::Short);
    }

    #[test]
    fn test_catalog_starts_unselected() {
        let tags = ToneTag::catalog();
        assert_eq!(tags.len(), TONE_CATALOG.len());
        assert!(tags.iter().all(|t| !t.selected));
    }

    #[test]
    fn test_default_request_has_language_preset() {
        let request = PromptRequest::default();
        assert_eq!(request.language, DEFAULT_LANGUAGE);
        assert!(request.role.is_empty());
        assert!(request.tones.is_empty());
        assert_eq!(request.length, PromptLength::Medium);
    }
}
