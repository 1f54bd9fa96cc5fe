use super::{ArgsPattern, Captures};
use crate::error::PatternError;
use indexmap::IndexMap;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, map, opt},
    multi::separated_list0,
    sequence::{delimited, preceded},
    IResult, Parser as _,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Word { name: String, optional: bool },
    Rest { name: String, optional: bool },
}

/// A whitespace separated argument signature such as `"<item> [to] <target>"`.
///
/// * `<name>` captures one required word.
/// * `[name]` captures one word if there is one.
/// * `<name...>` and `[name...]` capture the rest of the line and must come last.
/// * Anything else is a literal word that has to appear as written.
///
/// Text left over once every segment has matched makes the match fail.
#[derive(Debug, Clone)]
pub struct SignaturePattern {
    template: String,
    segments: Vec<Segment>,
}

impl SignaturePattern {
    pub fn new(template: &str) -> Result<Self, PatternError> {
        let segments = match parse_template(template) {
            Ok((_, segments)) => segments,
            Err(err) => {
                let near = match err {
                    nom::Err::Error(e) | nom::Err::Failure(e) => e.input.to_string(),
                    nom::Err::Incomplete(_) => String::new(),
                };
                return Err(PatternError::Template {
                    template: template.to_string(),
                    near,
                });
            }
        };

        if let Some(position) = segments
            .iter()
            .position(|segment| matches!(segment, Segment::Rest { .. }))
        {
            if position + 1 != segments.len() {
                if let Segment::Rest { name, .. } = &segments[position] {
                    return Err(PatternError::RestNotLast(name.clone()));
                }
            }
        }

        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl ArgsPattern for SignaturePattern {
    fn captures(&self, text: &str) -> Option<Captures> {
        let mut positional = Vec::new();
        let mut named = IndexMap::new();
        let mut remaining = text;

        for segment in &self.segments {
            match segment {
                Segment::Literal(expected) => {
                    let (rest, word) = next_word(remaining).ok()?;
                    if word != expected {
                        return None;
                    }
                    remaining = rest;
                }
                Segment::Word { name, optional } => {
                    let value = match next_word(remaining) {
                        Ok((rest, word)) => {
                            remaining = rest;
                            Some(word.to_string())
                        }
                        Err(_) if *optional => None,
                        Err(_) => return None,
                    };
                    positional.push(value.clone());
                    named.insert(name.clone(), value);
                }
                Segment::Rest { name, optional } => {
                    let rest = remaining.trim();
                    remaining = "";
                    let value = if rest.is_empty() {
                        if !optional {
                            return None;
                        }
                        None
                    } else {
                        Some(rest.to_string())
                    };
                    positional.push(value.clone());
                    named.insert(name.clone(), value);
                }
            }
        }

        if !remaining.trim().is_empty() {
            return None;
        }
        Some(Captures::new(positional, named))
    }
}

fn next_word(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_till1(char::is_whitespace)).parse(input)
}

fn ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-').parse(input)
}

fn capture(
    open: char,
    close: char,
    optional: bool,
) -> impl FnMut(&str) -> IResult<&str, Segment> {
    move |input| {
        map(
            delimited(char(open), (ident, opt(tag("..."))), char(close)),
            |(name, ellipsis): (&str, Option<&str>)| {
                let name = name.to_string();
                if ellipsis.is_some() {
                    Segment::Rest { name, optional }
                } else {
                    Segment::Word { name, optional }
                }
            },
        )
        .parse(input)
    }
}

fn literal(input: &str) -> IResult<&str, Segment> {
    map(
        take_while1(|c: char| !c.is_whitespace() && !"<>[]".contains(c)),
        |word: &str| Segment::Literal(word.to_string()),
    )
    .parse(input)
}

fn segment(input: &str) -> IResult<&str, Segment> {
    alt((capture('<', '>', false), capture('[', ']', true), literal)).parse(input)
}

fn parse_template(input: &str) -> IResult<&str, Vec<Segment>> {
    all_consuming(delimited(
        multispace0,
        separated_list0(multispace1, segment),
        multispace0,
    ))
    .parse(input)
}
