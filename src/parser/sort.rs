// Sort-command parser for the GlyphPipe DSL

use super::ast::{SortOrder, SortSpec};
use super::lexer::{attribute_name, ws};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{map, value},
    sequence::preceded,
    IResult,
};

/// Parse a sort command
/// Format: sort(by: Proline, order: desc)
/// Both the attribute and the direction are required; a sort without either
/// half is not representable (the controller models partial selections).
pub fn parse_sort(input: &str) -> IResult<&str, SortSpec> {
    let (input, _) = ws(tag("sort"))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, by) = preceded(ws(tag("by:")), ws(attribute_name))(input)?;
    let (input, _) = ws(char(','))(input)?;
    let (input, order) = preceded(ws(tag("order:")), ws(sort_order))(input)?;

    let (input, _) = ws(char(')'))(input)?;

    Ok((input, SortSpec { by, order }))
}

fn sort_order(input: &str) -> IResult<&str, SortOrder> {
    alt((
        value(SortOrder::Ascending, tag("ascending")),
        value(SortOrder::Ascending, tag("asc")),
        value(SortOrder::Descending, tag("descending")),
        value(SortOrder::Descending, tag("desc")),
        map(
            super::lexer::string_literal,
            |s| if s.starts_with("desc") {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            },
        ),
    ))(input)
}
