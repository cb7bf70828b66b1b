//! Dataset row type.

/// One animal from the dataset. Only `name` is guaranteed; every other
/// field may be absent and hint generation has to cope with that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalRecord {
    /// The secret word. Never empty.
    pub name: String,
    /// Taxonomic label, e.g. "mammal".
    pub category: Option<String>,
    /// Alternative names in dataset order; underscores mark multi-word phrases.
    pub synonyms: Option<Vec<String>>,
    pub definition: Option<String>,
}

impl AnimalRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            synonyms: None,
            definition: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = Some(synonyms.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }
}
