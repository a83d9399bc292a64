use crate::bindings::Binding;
use crate::{SET_KEYWORD, SIGIL};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SetSyntax {
    #[error("set takes exactly one argument, got {0} tokens")]
    Arity(usize),
    #[error("statement does not start with set")]
    NotSet,
    #[error("variable name must start with $")]
    MissingSigil,
    #[error("variable name is empty")]
    BareSigil,
    #[error("missing '=' between name and value")]
    MissingSeparator,
    #[error("value is empty")]
    EmptyValue,
}

/// Parses `set $name=value` into a [`Binding`].
///
/// The name runs up to the first `=` and keeps the sigil; everything after it
/// is the value, including any further `=`.
pub fn parse_set(tokens: &[String]) -> Result<Binding, SetSyntax> {
    let [keyword, arg] = tokens else {
        return Err(SetSyntax::Arity(tokens.len()));
    };

    if keyword != SET_KEYWORD {
        return Err(SetSyntax::NotSet);
    }

    if !arg.starts_with(SIGIL) {
        return Err(SetSyntax::MissingSigil);
    }

    if arg.len() == SIGIL.len_utf8() {
        return Err(SetSyntax::BareSigil);
    }

    let Some((name, value)) = arg.split_once('=') else {
        return Err(SetSyntax::MissingSeparator);
    };

    if value.is_empty() {
        return Err(SetSyntax::EmptyValue);
    }

    Ok(Binding::new(name, value))
}
