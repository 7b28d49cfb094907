//! Classification of a single template line.

use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::{char, space0};
use nom::combinator::{all_consuming, map, opt, rest};
use nom::sequence::{delimited, preceded, terminated, tuple};
use nom::{Finish, IResult};

/// A `Key = Value ; comment` assignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Binding<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub comment: Option<&'a str>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment(&'a str),
    Section {
        name: &'a str,
        comment: Option<&'a str>,
    },
    Binding(Binding<'a>),
}

impl<'a> Line<'a> {
    /// Returns the kind of `text`, or `None` if it is not one of the
    /// four line kinds a template may contain.
    pub fn classify(text: &'a str) -> Option<Self> {
        all_consuming(line)(text).finish().ok().map(|(_, l)| l)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Line::Blank)
    }

    pub fn as_binding(&self) -> Option<&Binding<'a>> {
        match self {
            Line::Binding(b) => Some(b),
            _ => None,
        }
    }
}

fn ident(i: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(i)
}

fn value(i: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != ';')(i)
}

fn comment(i: &str) -> IResult<&str, &str> {
    map(preceded(char(';'), rest), str::trim)(i)
}

fn trailing_comment(i: &str) -> IResult<&str, Option<&str>> {
    terminated(opt(comment), space0)(i)
}

fn blank(i: &str) -> IResult<&str, Line<'_>> {
    map(space0, |_| Line::Blank)(i)
}

fn comment_line(i: &str) -> IResult<&str, Line<'_>> {
    map(preceded(space0, comment), Line::Comment)(i)
}

fn section(i: &str) -> IResult<&str, Line<'_>> {
    map(
        tuple((
            preceded(space0, delimited(char('['), ident, char(']'))),
            preceded(space0, trailing_comment),
        )),
        |(name, comment)| Line::Section { name, comment },
    )(i)
}

fn binding(i: &str) -> IResult<&str, Line<'_>> {
    map(
        tuple((
            preceded(space0, ident),
            delimited(space0, char('='), space0),
            value,
            preceded(space0, trailing_comment),
        )),
        |(key, _, value, comment)| {
            Line::Binding(Binding {
                key,
                value,
                comment,
            })
        },
    )(i)
}

fn line(i: &str) -> IResult<&str, Line<'_>> {
    alt((comment_line, section, binding, blank))(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment() {
        assert_eq!(comment("; case sensitive   "), Ok(("", "case sensitive")));
        assert_eq!(comment(";"), Ok(("", "")));
    }

    #[test]
    fn test_blank() {
        assert_eq!(Line::classify(""), Some(Line::Blank));
        assert_eq!(Line::classify("        "), Some(Line::Blank));
    }

    #[test]
    fn test_comment_line() {
        let l = Line::classify("; Keys are editable in 'input_config.ini'      ");
        assert_eq!(l, Some(Line::Comment("Keys are editable in 'input_config.ini'")));

        let l = Line::classify("                         ; by default is videoY   ");
        assert_eq!(l, Some(Line::Comment("by default is videoY")));
    }

    #[test]
    fn test_section() {
        let l = Line::classify("[Emulator]               ; case sensitive      ");
        assert_eq!(
            l,
            Some(Line::Section {
                name: "Emulator",
                comment: Some("case sensitive"),
            })
        );

        assert_eq!(
            Line::classify("[Hardware]"),
            Some(Line::Section {
                name: "Hardware",
                comment: None,
            })
        );
    }

    #[test]
    fn test_binding() {
        let l = Line::classify("MemoryMode   = CTRL+M    ; toggles between RAM, ROM0 and ROM1   ");
        assert_eq!(
            l,
            Some(Line::Binding(Binding {
                key: "MemoryMode",
                value: "CTRL+M",
                comment: Some("toggles between RAM, ROM0 and ROM1"),
            }))
        );

        let l = Line::classify("B = /").unwrap();
        let b = l.as_binding().unwrap();
        assert_eq!((b.key, b.value, b.comment), ("B", "/", None));

        let l = Line::classify("A            = .         ; A input").unwrap();
        assert_eq!(l.as_binding().map(|b| b.value), Some("."));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(Line::classify("Reset = CTRL+F1 junk"), None);
        assert_eq!(Line::classify("Reset ="), None);
        assert_eq!(Line::classify("[Emulator"), None);
        assert_eq!(Line::classify("[] ; empty"), None);
        assert_eq!(Line::classify("just words"), None);
    }
}
