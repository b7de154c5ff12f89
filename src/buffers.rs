//! Accumulating output buffers, one per include file.

use clap::ValueEnum;

/// Which include file a rendered line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Parameters,
    #[value(name = "parameterlists")]
    ParameterLists,
    Implicit,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Parameters,
        Category::ParameterLists,
        Category::Implicit,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Category::Parameters => "parameters.txt",
            Category::ParameterLists => "parameterlists.txt",
            Category::Implicit => "implicit.txt",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Parameters => "Externally Synchronized Parameters",
            Category::ParameterLists => "Externally Synchronized Parameter Lists",
            Category::Implicit => "Implicit Externally Synchronized Parameters",
        }
    }
}

/// A single category's accumulated text.
///
/// `Disabled` produces no file at all; `Empty` still produces one with
/// only the surrounding markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Buffer {
    Disabled,
    #[default]
    Empty,
    Filled(String),
}

impl Buffer {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Buffer::Disabled)
    }

    /// Accumulated text, or `None` when disabled.
    pub fn contents(&self) -> Option<&str> {
        match self {
            Buffer::Disabled => None,
            Buffer::Empty => Some(""),
            Buffer::Filled(text) => Some(text),
        }
    }

    /// Append-only; a disabled buffer drops the text.
    pub fn push(&mut self, text: &str) {
        match self {
            Buffer::Disabled => {}
            Buffer::Empty => *self = Buffer::Filled(text.to_string()),
            Buffer::Filled(acc) => acc.push_str(text),
        }
    }
}

/// The three include buffers for a generation run.
///
/// Owned by the driver and lent to each command's processing step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncBuffers {
    parameters: Buffer,
    parameter_lists: Buffer,
    implicit: Buffer,
}

impl SyncBuffers {
    /// All categories enabled except those listed.
    pub fn with_disabled(disabled: &[Category]) -> Self {
        let mut buffers = Self::default();
        for &category in disabled {
            *buffers.get_mut(category) = Buffer::Disabled;
        }
        buffers
    }

    pub fn get(&self, category: Category) -> &Buffer {
        match category {
            Category::Parameters => &self.parameters,
            Category::ParameterLists => &self.parameter_lists,
            Category::Implicit => &self.implicit,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Buffer {
        match category {
            Category::Parameters => &mut self.parameters,
            Category::ParameterLists => &mut self.parameter_lists,
            Category::Implicit => &mut self.implicit,
        }
    }

    pub fn append(&mut self, category: Category, text: &str) {
        self.get_mut(category).push(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_transitions() {
        let mut buf = Buffer::default();
        assert_eq!(buf.contents(), Some(""));
        buf.push("* a\n");
        buf.push("* b\n");
        assert_eq!(buf, Buffer::Filled("* a\n* b\n".to_string()));
    }

    #[test]
    fn disabled_buffer_drops_text() {
        let mut buf = Buffer::Disabled;
        buf.push("* a\n");
        assert_eq!(buf, Buffer::Disabled);
        assert_eq!(buf.contents(), None);
        assert!(!buf.is_enabled());
    }

    #[test]
    fn disabled_and_empty_are_distinct() {
        let buffers = SyncBuffers::with_disabled(&[Category::Implicit]);
        assert_eq!(buffers.get(Category::Parameters), &Buffer::Empty);
        assert_eq!(buffers.get(Category::ParameterLists), &Buffer::Empty);
        assert_eq!(buffers.get(Category::Implicit), &Buffer::Disabled);
    }

    #[test]
    fn append_routes_by_category() {
        let mut buffers = SyncBuffers::default();
        buffers.append(Category::ParameterLists, "* x\n");
        assert_eq!(buffers.get(Category::Parameters).contents(), Some(""));
        assert_eq!(
            buffers.get(Category::ParameterLists).contents(),
            Some("* x\n")
        );
    }

    #[test]
    fn file_names_and_titles() {
        assert_eq!(Category::ParameterLists.file_name(), "parameterlists.txt");
        assert_eq!(
            Category::Implicit.title(),
            "Implicit Externally Synchronized Parameters"
        );
    }
}
