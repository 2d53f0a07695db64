// Pipeline parser for the GlyphPipe DSL

use super::ast::{GlyphBindings, MapSpec, SortSpec};
use super::bindings::parse_glyph;
use super::lexer::ws;
use super::sort::parse_sort;
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{eof, map},
    error::{Error, ErrorKind},
    multi::separated_list1,
    IResult,
};

#[derive(Debug)]
enum PipelineComponent {
    Glyph(GlyphBindings),
    Sort(SortSpec),
}

fn parse_pipeline_component(input: &str) -> IResult<&str, PipelineComponent> {
    alt((
        map(parse_glyph, PipelineComponent::Glyph),
        map(parse_sort, PipelineComponent::Sort),
    ))(input)
}

/// Parse a complete map specification
/// Format: component | component | ...
pub fn parse_map_spec(input: &str) -> IResult<&str, MapSpec> {
    if input.trim().is_empty() {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Eof)));
    }

    let (input, components) = separated_list1(
        ws(tag("|")),
        parse_pipeline_component,
    )(input)?;

    let (input, _) = ws(eof)(input)?;

    // Aggregate components into MapSpec: glyph slots merge per-slot,
    // a later sort command replaces an earlier one.
    let mut bindings = GlyphBindings::default();
    let mut sort = None;

    for comp in components {
        match comp {
            PipelineComponent::Glyph(g) => {
                if g.color.is_some() {
                    bindings.color = g.color;
                }
                if g.fill.is_some() {
                    bindings.fill = g.fill;
                }
                if g.ice.is_some() {
                    bindings.ice = g.ice;
                }
                if g.straw.is_some() {
                    bindings.straw = g.straw;
                }
            }
            PipelineComponent::Sort(s) => sort = Some(s),
        }
    }

    Ok((input, MapSpec { bindings, sort }))
}
