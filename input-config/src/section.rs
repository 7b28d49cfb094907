//! Section view over the built-in template.

use crate::defaults::DefaultConfigDocument;
use crate::error::ConfigError;
use crate::line::{Binding, Line};

/// A `[Name]` header and the lines that follow it up to the next header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section<'a> {
    pub name: &'a str,
    pub comment: Option<&'a str>,
    pub bindings: Vec<Binding<'a>>,
    /// Comment-only lines inside the section, in order.
    pub notes: Vec<&'a str>,
}

impl<'a> Section<'a> {
    fn new(name: &'a str, comment: Option<&'a str>) -> Self {
        Self {
            name,
            comment,
            bindings: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Case sensitive lookup of `key`.
    pub fn binding(&self, key: &str) -> Option<&Binding<'a>> {
        self.bindings.iter().find(|b| b.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.bindings.iter().map(|b| b.key)
    }
}

impl DefaultConfigDocument {
    /// Every line with its 1-based line number and kind.
    pub fn classified(&self) -> Result<Vec<(usize, Line<'static>)>, ConfigError> {
        self.iter()
            .enumerate()
            .map(|(idx, text)| {
                Line::classify(text)
                    .map(|l| (idx + 1, l))
                    .ok_or_else(|| ConfigError::Malformed {
                        line: idx + 1,
                        text: text.trim_end().to_owned(),
                    })
            })
            .collect()
    }

    /// Comment lines that come before the first section header.
    pub fn preamble(&self) -> Result<Vec<&'static str>, ConfigError> {
        let lines = self.classified()?;
        Ok(lines
            .into_iter()
            .map(|(_, l)| l)
            .take_while(|l| !matches!(l, Line::Section { .. }))
            .filter_map(|l| match l {
                Line::Comment(c) => Some(c),
                _ => None,
            })
            .collect())
    }

    /// Sections in document order.
    pub fn sections(&self) -> Result<Vec<Section<'static>>, ConfigError> {
        let mut sections: Vec<Section<'static>> = Vec::new();

        for (line, l) in self.classified()? {
            match l {
                Line::Section { name, comment } => sections.push(Section::new(name, comment)),
                Line::Binding(b) => match sections.last_mut() {
                    Some(s) => s.bindings.push(b),
                    // an assignment needs a header above it
                    None => {
                        return Err(ConfigError::Malformed {
                            line,
                            text: self.lines()[line - 1].trim_end().to_owned(),
                        })
                    }
                },
                Line::Comment(c) => {
                    if let Some(s) = sections.last_mut() {
                        s.notes.push(c);
                    }
                }
                Line::Blank => {}
            }
        }

        Ok(sections)
    }

    /// Value bound to `key` in `section`, both case sensitive.
    pub fn binding(
        &self,
        section: &str,
        key: &str,
    ) -> Result<Option<&'static str>, ConfigError> {
        Ok(self
            .sections()?
            .iter()
            .find(|s| s.name == section)
            .and_then(|s| s.binding(key))
            .map(|b| b.value))
    }
}
