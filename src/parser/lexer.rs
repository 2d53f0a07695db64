// Shared lexing combinators for the GlyphPipe DSL

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_while1},
    character::complete::multispace0,
    combinator::map,
    error::ParseError,
    sequence::delimited,
    IResult,
};

/// Wrap a parser so it eats surrounding whitespace
pub fn ws<'a, F, O, E: ParseError<&'a str>>(
    inner: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, E>,
{
    delimited(multispace0, inner, multispace0)
}

/// Bare identifier: letters, digits, underscores
pub fn identifier(input: &str) -> IResult<&str, String> {
    map(
        take_while1(|c: char| c.is_alphanumeric() || c == '_'),
        |s: &str| s.to_string(),
    )(input)
}

/// Double-quoted string literal (no escape handling needed for column names)
pub fn string_literal(input: &str) -> IResult<&str, String> {
    map(
        delimited(tag("\""), is_not("\""), tag("\"")),
        |s: &str| s.to_string(),
    )(input)
}

/// Attribute reference: quoted when the column name has spaces or
/// punctuation ("Color intensity", "OD280/OD315 of diluted wines"),
/// bare otherwise (Alcohol, Proline).
pub fn attribute_name(input: &str) -> IResult<&str, String> {
    alt((string_literal, identifier))(input)
}
