use super::error::GenerateError;

/// Fixed suffix every scaffoldable action name must carry.
pub const ACTION_SUFFIX: &str = "Action";

/// Derive an action's basename by stripping the `Action` suffix.
///
/// The basename is the template-facing identifier: `createAction` →
/// `create`, `listAllAction` → `listAll`.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidActionName`] when the name does not end
/// in the suffix or consists of nothing but the suffix.
pub fn action_basename(name: &str) -> Result<&str, GenerateError> {
    match name.strip_suffix(ACTION_SUFFIX) {
        Some(base) if !base.is_empty() => Ok(base),
        _ => Err(GenerateError::InvalidActionName {
            name: name.to_string(),
        }),
    }
}

/// Convert a camelCase basename to the snake_case route name.
///
/// An underscore is inserted before every interior uppercase letter and the
/// result is lowercased: `Create` → `create`, `ListAll` → `list_all`.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
