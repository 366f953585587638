use regex::{Captures, Regex};
use std::fmt::Display;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{(\d*)\}").expect("placeholder pattern is valid"));

/// Resolves `{}` and `{N}` placeholders in `template` against `args`.
///
/// `{}` takes the next unused sequential argument, `{N}` takes argument `N`
/// without advancing the sequence. `{{` and `}}` produce literal braces.
/// A placeholder without a matching argument is kept verbatim and surplus
/// arguments are ignored, so resolution never fails.
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    if !template.contains('{') && !template.contains('}') {
        return template.to_string();
    }

    let mut next = 0usize;
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match &caps[0] {
            "{{" => "{".to_string(),
            "}}" => "}".to_string(),
            placeholder => {
                let index = match caps.get(1).map(|m| m.as_str()) {
                    Some(digits) if !digits.is_empty() => digits.parse::<usize>().ok(),
                    _ => {
                        let index = next;
                        next += 1;
                        Some(index)
                    }
                };

                index
                    .and_then(|i| args.get(i))
                    .map(|arg| arg.to_string())
                    .unwrap_or_else(|| placeholder.to_string())
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_template_is_unchanged() {
        assert_eq!(format_message("iterable is empty", &[]), "iterable is empty");
    }

    #[test]
    fn test_sequential_placeholders() {
        assert_eq!(
            format_message("{} of {} items", &[&3, &"ten"]),
            "3 of ten items"
        );
    }

    #[test]
    fn test_positional_placeholders() {
        assert_eq!(format_message("{1}-{0}-{1}", &[&"a", &"b"]), "b-a-b");
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(format_message("{{{}}}", &[&42]), "{42}");
        assert_eq!(format_message("{{0}}", &[&42]), "{0}");
    }

    #[test]
    fn test_missing_argument_keeps_placeholder() {
        assert_eq!(format_message("{} and {}", &[&1]), "1 and {}");
        assert_eq!(format_message("{5}", &[&1]), "{5}");
    }

    #[test]
    fn test_surplus_arguments_are_ignored() {
        assert_eq!(format_message("only {}", &[&1, &2, &3]), "only 1");
    }
}
