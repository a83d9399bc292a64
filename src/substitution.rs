use crate::SIGIL;
use crate::bindings::BindingTable;

/// Replaces every `$name` token that has a binding with its value.
///
/// Unbound `$name` tokens stay as typed. Values are not expanded again, even
/// when they start with the sigil themselves. Returns how many tokens changed.
pub fn substitute(tokens: &mut [String], bindings: &BindingTable) -> usize {
    let mut replaced = 0;

    for token in tokens.iter_mut().filter(|token| token.starts_with(SIGIL)) {
        if let Some(value) = bindings.lookup(token) {
            *token = value.to_owned();
            replaced += 1;
        }
    }

    replaced
}
