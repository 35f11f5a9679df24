//! Printf-style substitution of a single quantity into a plural template.
//!
//! Templates come from translators and use C-style directives (`%d item`,
//! `%.1f MB`). Only the first directive is replaced; `%%` escapes a literal
//! percent sign anywhere in the template.

/// The quantity being substituted.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Quantity {
    Int(i64),
    Float(f64),
}

impl Quantity {
    fn as_int(self) -> i64 {
        match self {
            Self::Int(value) => value,
            Self::Float(value) => value.trunc() as i64,
        }
    }

    fn as_float(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }
}

/// Substitute `quantity` into the first numeric directive of `template`.
///
/// Supported conversions: `d`, `i`, `u` (integer), `f` with optional
/// precision (fixed-point, printf default precision 6), and `@` (display).
/// Length modifiers (`l`, `h`) are accepted and ignored. Directives after
/// the first are left verbatim; an unterminated `%` is copied through.
pub(crate) fn substitute(template: &str, quantity: Quantity) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut chars = template.char_indices().peekable();
    let mut substituted = false;

    while let Some((start, ch)) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        if let Some((_, '%')) = chars.peek() {
            chars.next();
            out.push('%');
            continue;
        }

        if substituted {
            out.push('%');
            continue;
        }

        match parse_directive(&template[start..]) {
            Some(directive) => {
                out.push_str(&directive.render(quantity));
                // skip the directive body, '%' already consumed
                for _ in 0..directive.len - 1 {
                    chars.next();
                }
                substituted = true;
            },
            None => out.push('%'),
        }
    }

    out
}

struct Directive {
    /// Length in characters, including the leading `%` (ASCII only).
    len: usize,
    precision: Option<usize>,
    conversion: char,
}

impl Directive {
    fn render(&self, quantity: Quantity) -> String {
        match self.conversion {
            'd' | 'i' | 'u' => quantity.as_int().to_string(),
            'f' => format!("{:.*}", self.precision.unwrap_or(6), quantity.as_float()),
            '@' => match quantity {
                Quantity::Int(value) => value.to_string(),
                Quantity::Float(value) => value.to_string(),
            },
            _ => unreachable!("parse_directive only yields supported conversions"),
        }
    }
}

/// Parse the directive at the start of `input` (which begins with `%`).
fn parse_directive(input: &str) -> Option<Directive> {
    let mut precision = None;
    let mut len = 1;

    let mut rest = input[1..].chars();
    let mut current = rest.next()?;

    // flags and width
    while current == '-' || current == '+' || current == ' ' || current.is_ascii_digit() {
        len += 1;
        current = rest.next()?;
    }

    if current == '.' {
        let mut digits = String::new();
        len += 1;
        current = rest.next()?;
        while current.is_ascii_digit() {
            digits.push(current);
            len += 1;
            current = rest.next()?;
        }
        precision = Some(digits.parse().ok()?);
    }

    while current == 'l' || current == 'h' {
        len += 1;
        current = rest.next()?;
    }

    match current {
        'd' | 'i' | 'u' | 'f' | '@' => Some(Directive {
            len: len + 1,
            precision,
            conversion: current,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(template: &str, value: i64) -> String {
        substitute(template, Quantity::Int(value))
    }

    fn float(template: &str, value: f64) -> String {
        substitute(template, Quantity::Float(value))
    }

    #[test]
    fn integer_directives() {
        assert_eq!(int("%d item", 1), "1 item");
        assert_eq!(int("%d items", 5), "5 items");
        assert_eq!(int("%i items", -3), "-3 items");
        assert_eq!(int("%ld bytes", 42), "42 bytes");
    }

    #[test]
    fn float_directives() {
        assert_eq!(float("%.1f MB", 2.5), "2.5 MB");
        assert_eq!(float("%.0f MB", 2.5), "2 MB");
        assert_eq!(float("%f", 1.5), "1.500000");
    }

    #[test]
    fn display_directive() {
        assert_eq!(int("%@ items", 7), "7 items");
        assert_eq!(float("%@ items", 1.5), "1.5 items");
    }

    #[test]
    fn only_first_directive_is_replaced() {
        assert_eq!(int("%d of %d", 3), "3 of %d");
    }

    #[test]
    fn percent_escape() {
        assert_eq!(int("%d%% done", 80), "80% done");
        assert_eq!(int("100%% sure", 1), "100% sure");
    }

    #[test]
    fn template_without_directive_is_unchanged() {
        assert_eq!(int("no placeholders here", 9), "no placeholders here");
        assert_eq!(int("trailing %", 9), "trailing %");
        assert_eq!(int("unknown %s stays", 9), "unknown %s stays");
    }

    #[test]
    fn int_formats_as_integer_through_float_directive() {
        // an integer quantity against a %f template keeps printf semantics
        assert_eq!(int("%.1f items", 4), "4.0 items");
    }
}
