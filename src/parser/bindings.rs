// Glyph-binding parser for the GlyphPipe DSL

use super::ast::GlyphBindings;
use super::lexer::{attribute_name, ws};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::map,
    multi::separated_list0,
    sequence::preceded,
    IResult,
};

/// Parse a glyph command
/// Format: glyph() or glyph(color: "Color intensity", fill: Alcohol, ice: Ash, straw: Proline)
/// Slots may appear in any order; unspecified slots keep their defaults.
pub fn parse_glyph(input: &str) -> IResult<&str, GlyphBindings> {
    let (input, _) = ws(tag("glyph"))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, args) = separated_list0(
        ws(char(',')),
        alt((
            map(
                preceded(ws(tag("color:")), ws(attribute_name)),
                |a| ("color", a),
            ),
            map(
                preceded(ws(tag("fill:")), ws(attribute_name)),
                |a| ("fill", a),
            ),
            map(
                preceded(ws(tag("ice:")), ws(attribute_name)),
                |a| ("ice", a),
            ),
            map(
                preceded(ws(tag("straw:")), ws(attribute_name)),
                |a| ("straw", a),
            ),
        )),
    )(input)?;

    let (input, _) = ws(char(')'))(input)?;

    let mut bindings = GlyphBindings::default();
    for (slot, attribute) in args {
        match slot {
            "color" => bindings.color = Some(attribute),
            "fill" => bindings.fill = Some(attribute),
            "ice" => bindings.ice = Some(attribute),
            "straw" => bindings.straw = Some(attribute),
            _ => {}
        }
    }

    Ok((input, bindings))
}
