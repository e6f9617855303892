/// RF technologies a discovered tag may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagTechnology {
    NfcA,
    NfcB,
    /// FeliCa
    NfcF,
    NfcV,
    IsoDep,
}

/// A tag as reported by the platform's discovery callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    id: Vec<u8>,
    technologies: Vec<TagTechnology>,
}

impl Tag {
    pub fn new(id: impl Into<Vec<u8>>, technologies: impl Into<Vec<TagTechnology>>) -> Self {
        Self {
            id: id.into(),
            technologies: technologies.into(),
        }
    }

    /// Convenience for a FeliCa-only tag.
    pub fn felica(idm: [u8; 8]) -> Self {
        Self::new(idm, [TagTechnology::NfcF])
    }

    /// Identifier bytes; the IDm for FeliCa tags.
    pub fn id(&self) -> &[u8] {
        &self.id
    }

    pub fn technologies(&self) -> &[TagTechnology] {
        &self.technologies
    }

    pub fn supports(&self, tech: TagTechnology) -> bool {
        self.technologies.contains(&tech)
    }
}
