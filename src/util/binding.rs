use crate::{
    error::BindingError,
    interpreter::value::{Bindings, Bit},
};

/// Parses a single `NAME=BIT` binding.
///
/// Whitespace around the name and the value is ignored. The name keeps its
/// casing, since variable lookup is case-sensitive.
///
/// # Errors
/// Returns a [`BindingError`] when the `=` is missing, the name is empty, or
/// the value is not `0` or `1`.
///
/// # Example
/// ```
/// use boolcalc::{interpreter::value::Bit, util::binding::parse_binding};
///
/// assert_eq!(parse_binding("Carry = 1").unwrap(), ("Carry".to_string(), Bit::One));
/// assert!(parse_binding("X").is_err());
/// assert!(parse_binding("X=2").is_err());
/// ```
pub fn parse_binding(binding: &str) -> Result<(String, Bit), BindingError> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| BindingError::MissingSeparator { binding:
                                                                                   binding.to_string(), })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(BindingError::EmptyName { binding: binding.to_string() });
    }

    Ok((name.to_string(), value.parse()?))
}

/// Collects parsed bindings into a [`Bindings`] map.
///
/// # Errors
/// Returns [`BindingError::DuplicateName`] when a name appears twice.
///
/// # Example
/// ```
/// use boolcalc::{interpreter::value::Bit, util::binding::collect_bindings};
///
/// let bindings =
///     collect_bindings([("X".to_string(), Bit::One), ("x".to_string(), Bit::Zero)]).unwrap();
/// assert_eq!(bindings.len(), 2);
///
/// assert!(collect_bindings([("X".to_string(), Bit::One), ("X".to_string(), Bit::One)]).is_err());
/// ```
pub fn collect_bindings<I>(pairs: I) -> Result<Bindings, BindingError>
    where I: IntoIterator<Item = (String, Bit)>
{
    let mut bindings = Bindings::new();
    for (name, bit) in pairs {
        if bindings.contains_key(&name) {
            return Err(BindingError::DuplicateName { name });
        }
        bindings.insert(name, bit);
    }
    Ok(bindings)
}
