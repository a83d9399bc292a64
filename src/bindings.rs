use crate::ShellError;
use std::slice::Iter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub value: String,
}

impl Binding {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Append-only list of bindings in definition order.
///
/// Rebinding a name adds a second entry instead of replacing the first;
/// [`BindingTable::lookup`] returns the most recent one.
#[derive(Debug)]
pub struct BindingTable {
    entries: Vec<Binding>,
    max_len: usize,
}

impl BindingTable {
    pub fn new(max_len: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_len,
        }
    }

    pub fn push(&mut self, binding: Binding) -> Result<(), ShellError> {
        if self.entries.len() >= self.max_len {
            return Err(ShellError::TooManyBindings { max: self.max_len });
        }

        self.entries.push(binding);
        Ok(())
    }

    /// Value of the last binding named `name`, sigil included.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|binding| binding.name == name)
            .map(|binding| binding.value.as_str())
    }

    pub fn iter(&self) -> Iter<'_, Binding> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a BindingTable {
    type Item = &'a Binding;
    type IntoIter = Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
