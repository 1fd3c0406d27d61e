//! Format string interpretation.
//!
//! # Examples
//!
//! ```rust
//! use microlog::Arg;
//! use microlog::printf::debug_log_printf;
//! use microlog::test_helpers::RecordingLog;
//!
//! let backend = RecordingLog::new();
//! debug_log_printf(&backend, "%s took %d ms", &[Arg::Text("invoke"), Arg::Int(12)]);
//!
//! assert_eq!(backend.rendered(), "invoke took 12 ms\r\n");
//! ```

use core::iter::Peekable;
use core::str::Chars;

use microlog_api::{Arg, ArgKind, DebugLog};

use crate::FormatError;
use crate::cache::{LINE_TERMINATOR, OutputCache};

/// One of the recognized conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specifier {
    /// `%d`, a signed integer.
    Int,
    /// `%s`, a text fragment.
    Text,
    /// `%f`, a double-precision float.
    Float,
}

impl Specifier {
    /// Returns the specifier for a conversion letter, if it is one.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'd' => Some(Specifier::Int),
            's' => Some(Specifier::Text),
            'f' => Some(Specifier::Float),
            _ => None,
        }
    }

    /// The conversion letter following the `%`.
    pub fn letter(self) -> char {
        match self {
            Specifier::Int => 'd',
            Specifier::Text => 's',
            Specifier::Float => 'f',
        }
    }

    /// The kind of [`Arg`] this conversion consumes.
    pub fn expected_kind(self) -> ArgKind {
        match self {
            Specifier::Int => ArgKind::Int,
            Specifier::Text => ArgKind::Text,
            Specifier::Float => ArgKind::Float,
        }
    }
}

impl core::fmt::Display for Specifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "%{}", self.letter())
    }
}

/// An element of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A character printed as-is.
    Literal(char),
    /// A conversion consuming the next argument.
    Specifier(Specifier),
}

/// Splits a format string into [`Token`]s.
///
/// A `%` only starts a conversion when the next character is `d`, `s` or `f`. Otherwise, including at the end of the
/// string, the `%` is a literal.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Tokens<'a> {
    /// Creates a tokenizer over `format`.
    pub fn new(format: &'a str) -> Self {
        Self {
            chars: format.chars().peekable(),
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.chars.next()?;

        if current == '%'
            && let Some(specifier) = self.chars.peek().copied().and_then(Specifier::from_letter)
        {
            self.chars.next();
            return Some(Token::Specifier(specifier));
        }

        Some(Token::Literal(current))
    }
}

/// Renders `format` with `args` into `backend`, followed by [`LINE_TERMINATOR`].
///
/// Literal text is batched in an [`OutputCache`] and written before each conversion, whenever the cache fills up and
/// at the end. Each conversion consumes the next argument and is written with the matching typed call: `%d` with
/// [`DebugLog::log_i32`], `%s` with [`DebugLog::log_str`] and `%f` with [`DebugLog::log_f64`].
///
/// A conversion without an argument, or with an argument of another kind, is written as literal text and still
/// consumes the argument if there is one. Surplus arguments are ignored.
pub fn debug_log_printf<B>(backend: &B, format: &str, args: &[Arg<'_>])
where
    B: DebugLog + ?Sized,
{
    let mut cache = OutputCache::new(backend);
    let mut args = args.iter();

    for token in Tokens::new(format) {
        match token {
            Token::Literal(character) => cache.push(character),
            Token::Specifier(specifier) => {
                cache.flush();
                match (specifier, args.next()) {
                    (Specifier::Int, Some(Arg::Int(value))) => backend.log_i32(*value),
                    (Specifier::Text, Some(Arg::Text(text))) => backend.log_str(text),
                    (Specifier::Float, Some(Arg::Float(value))) => backend.log_f64(*value),
                    _ => {
                        cache.push('%');
                        cache.push(specifier.letter());
                    }
                }
            }
        }
    }

    cache.flush();
    backend.log_str(LINE_TERMINATOR);
}

/// Renders Rust formatting arguments into `backend` through an [`OutputCache`], followed by [`LINE_TERMINATOR`].
///
/// Numbers are rendered to text here, so only [`DebugLog::log_str`] is called.
pub fn print_fmt<B>(backend: &B, args: core::fmt::Arguments<'_>)
where
    B: DebugLog + ?Sized,
{
    use core::fmt::Write;

    let mut cache = OutputCache::new(backend);
    // this is a logger, a failing `Display` impl only truncates the message
    let _ = cache.write_fmt(args);
    cache.flush();
    backend.log_str(LINE_TERMINATOR);
}

/// Checks that `args` match the conversions in `format` one to one.
///
/// [`debug_log_printf`] accepts any arguments, this reports the first deviation.
///
/// ```rust
/// use microlog::printf::{Specifier, check};
/// use microlog::{Arg, FormatError};
///
/// assert_eq!(check("%d of %d", &[Arg::Int(1), Arg::Int(3)]), Ok(()));
/// assert_eq!(
///     check("%d of %d", &[Arg::Int(1)]),
///     Err(FormatError::MissingArgument { index: 1, specifier: Specifier::Int }),
/// );
/// ```
pub fn check(format: &str, args: &[Arg<'_>]) -> Result<(), FormatError> {
    let specifiers = Tokens::new(format).filter_map(|token| match token {
        Token::Specifier(specifier) => Some(specifier),
        Token::Literal(_) => None,
    });

    let mut consumed = 0;
    for (index, specifier) in specifiers.enumerate() {
        let Some(arg) = args.get(index) else {
            return Err(FormatError::MissingArgument { index, specifier });
        };

        let expected = specifier.expected_kind();
        if arg.kind() != expected {
            return Err(FormatError::MismatchedArgument {
                index,
                expected,
                found: arg.kind(),
            });
        }

        consumed += 1;
    }

    match args.len() - consumed {
        0 => Ok(()),
        count => Err(FormatError::UnusedArguments { count }),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::vec::Vec;

    use microlog_api::{Arg, ArgKind};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{Specifier, Token, Tokens, check};
    use crate::FormatError;

    fn tokens(format: &str) -> Vec<Token> {
        Tokens::new(format).collect()
    }

    #[test]
    fn tokenizes_conversions() {
        assert_eq!(
            tokens("a%db%s%f"),
            [
                Token::Literal('a'),
                Token::Specifier(Specifier::Int),
                Token::Literal('b'),
                Token::Specifier(Specifier::Text),
                Token::Specifier(Specifier::Float),
            ]
        );
    }

    #[test_case("%", &[Token::Literal('%')] ; "lone percent")]
    #[test_case("%x", &[Token::Literal('%'), Token::Literal('x')] ; "unknown letter")]
    #[test_case("%%d", &[Token::Literal('%'), Token::Specifier(Specifier::Int)] ; "no escape")]
    #[test_case("%D", &[Token::Literal('%'), Token::Literal('D')] ; "case sensitive")]
    #[test_case("", &[] ; "empty")]
    fn percent_edge_cases(format: &str, expected: &[Token]) {
        assert_eq!(tokens(format), expected);
    }

    #[test]
    fn specifier_round_trips_letter() {
        for specifier in [Specifier::Int, Specifier::Text, Specifier::Float] {
            assert_eq!(Specifier::from_letter(specifier.letter()), Some(specifier));
        }
        assert_eq!(Specifier::from_letter('u'), None);
    }

    #[test]
    fn specifier_display() {
        use std::string::ToString;

        assert_eq!(Specifier::Float.to_string(), "%f");
    }

    #[test_case("plain", &[], Ok(()) ; "no conversions")]
    #[test_case("%d %s %f", &[Arg::Int(1), Arg::Text("a"), Arg::Float(2.0)], Ok(()) ; "all kinds")]
    #[test_case(
        "%s",
        &[],
        Err(FormatError::MissingArgument { index: 0, specifier: Specifier::Text })
        ; "missing"
    )]
    #[test_case(
        "%d %f",
        &[Arg::Int(1), Arg::Int(2)],
        Err(FormatError::MismatchedArgument { index: 1, expected: ArgKind::Float, found: ArgKind::Int })
        ; "mismatched"
    )]
    #[test_case("%d", &[Arg::Int(1), Arg::Int(2), Arg::Int(3)], Err(FormatError::UnusedArguments { count: 2 }) ; "unused")]
    #[test_case("100%", &[Arg::Int(1)], Err(FormatError::UnusedArguments { count: 1 }) ; "trailing percent")]
    fn checks_arguments(format: &str, args: &[Arg<'_>], expected: Result<(), FormatError>) {
        assert_eq!(check(format, args), expected);
    }

    #[test]
    fn error_messages() {
        use std::string::ToString;

        assert_eq!(
            FormatError::MismatchedArgument {
                index: 2,
                expected: ArgKind::Text,
                found: ArgKind::Float,
            }
            .to_string(),
            "conversion 2 expects text but the argument is float"
        );
        assert_eq!(
            FormatError::MissingArgument {
                index: 0,
                specifier: Specifier::Int,
            }
            .to_string(),
            "conversion 0 (%d) has no argument"
        );
    }
}
