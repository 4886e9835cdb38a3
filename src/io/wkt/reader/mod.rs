//! A recursive-descent WKT parser.

mod token;

use phf::phf_map;

use crate::error::{GeometryError, ParseError};
use crate::geometry::{
    Coord, Dimension, Geometry, GeometryCollection, GeometryType, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, MAX_NESTING_DEPTH,
};
use token::{tokenize, Spanned, Token};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Keyword {
    Tag(GeometryType),
    Z,
    Empty,
}

/// Upper-case keywords. Words are upper-cased before lookup.
static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "POINT" => Keyword::Tag(GeometryType::Point),
    "LINESTRING" => Keyword::Tag(GeometryType::LineString),
    "POLYGON" => Keyword::Tag(GeometryType::Polygon),
    "MULTIPOINT" => Keyword::Tag(GeometryType::MultiPoint),
    "MULTILINESTRING" => Keyword::Tag(GeometryType::MultiLineString),
    "MULTIPOLYGON" => Keyword::Tag(GeometryType::MultiPolygon),
    "GEOMETRYCOLLECTION" => Keyword::Tag(GeometryType::GeometryCollection),
    "Z" => Keyword::Z,
    "EMPTY" => Keyword::Empty,
};

fn keyword(word: &str) -> Option<Keyword> {
    KEYWORDS.get(word.to_ascii_uppercase().as_str()).copied()
}

/// Parse a complete WKT string into a [`Geometry`].
///
/// Keywords are case-insensitive and whitespace between tokens is ignored. Anything after the
/// geometry is an error.
pub fn parse_wkt(text: &str) -> Result<Geometry, ParseError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(ParseError::new(0, "empty input"));
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        end: text.len(),
    };
    let geom = parser.geometry(0)?;
    if let Some((offset, token)) = parser.peek() {
        return Err(ParseError::new(
            offset,
            format!("unexpected {token} after geometry"),
        ));
    }
    Ok(geom)
}

struct Parser<'a> {
    tokens: Vec<Spanned<'a>>,
    pos: usize,
    /// Offset reported for errors at the end of input.
    end: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Spanned<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self, expected: &str) -> Result<Spanned<'a>, ParseError> {
        let token = self.peek().ok_or_else(|| {
            ParseError::new(self.end, format!("expected {expected}, found end of input"))
        })?;
        self.pos += 1;
        Ok(token)
    }

    fn unexpected<T>(&self, (offset, token): Spanned<'_>, expected: &str) -> Result<T, ParseError> {
        Err(ParseError::new(
            offset,
            format!("expected {expected}, found {token}"),
        ))
    }

    fn expect(&mut self, token: Token<'_>, expected: &str) -> Result<(), ParseError> {
        let found = self.next(expected)?;
        if found.1 == token {
            Ok(())
        } else {
            self.unexpected(found, expected)
        }
    }

    /// Consume the next token if it is the given keyword.
    fn eat_keyword(&mut self, kw: Keyword) -> bool {
        match self.peek() {
            Some((_, Token::Word(word))) if keyword(word) == Some(kw) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Consume a `,` and return true, or consume a `)` and return false.
    fn comma_or_close(&mut self) -> Result<bool, ParseError> {
        let found = self.next("',' or ')'")?;
        match found.1 {
            Token::Comma => Ok(true),
            Token::RightParen => Ok(false),
            _ => self.unexpected(found, "',' or ')'"),
        }
    }

    /// `TAG [Z] EMPTY` or `TAG [Z] ( body )`
    fn geometry(&mut self, depth: usize) -> Result<Geometry, ParseError> {
        let (offset, token) = self.next("geometry type")?;
        let geometry_type = match token {
            Token::Word(word) => match keyword(word) {
                Some(Keyword::Tag(geometry_type)) => geometry_type,
                _ => {
                    return Err(ParseError::new(
                        offset,
                        format!("unknown geometry type '{word}'"),
                    ))
                }
            },
            _ => return self.unexpected((offset, token), "geometry type"),
        };
        if depth > MAX_NESTING_DEPTH {
            return Err(ParseError::new(
                offset,
                format!("geometries nested deeper than {MAX_NESTING_DEPTH} levels"),
            ));
        }

        let mut dim = self.eat_keyword(Keyword::Z).then_some(Dimension::XYZ);
        if self.eat_keyword(Keyword::Empty) {
            return Ok(empty_geometry(geometry_type, dim.unwrap_or_default()));
        }

        self.expect(Token::LeftParen, "'(' or EMPTY")?;
        let geom: Geometry = match geometry_type {
            GeometryType::Point => {
                let coord = self.coord(&mut dim)?;
                self.expect(Token::RightParen, "')'")?;
                Point::new_unchecked(coord).into()
            }
            GeometryType::LineString => self.line_string_body(&mut dim)?.into(),
            GeometryType::Polygon => self.polygon_body(offset, &mut dim)?.into(),
            GeometryType::MultiPoint => self.multi_point_body(offset, &mut dim)?.into(),
            GeometryType::MultiLineString => {
                let members = self.members(&mut dim, |p, dim| p.line_string(dim))?;
                let dim = dim.unwrap_or_default();
                let line_strings = fill_empty(members, || LineString::empty(dim));
                MultiLineString::try_new(line_strings, dim)
                    .map_err(|e| invalid(offset, e))?
                    .into()
            }
            GeometryType::MultiPolygon => {
                let members = self.members(&mut dim, |p, dim| p.polygon(dim))?;
                let dim = dim.unwrap_or_default();
                let polygons = fill_empty(members, || Polygon::empty(dim));
                MultiPolygon::try_new(polygons, dim)
                    .map_err(|e| invalid(offset, e))?
                    .into()
            }
            GeometryType::GeometryCollection => {
                let mut geometries = vec![];
                loop {
                    geometries.push(self.geometry(depth + 1)?);
                    if !self.comma_or_close()? {
                        break;
                    }
                }
                let dim = dim
                    .or_else(|| geometries.first().map(Geometry::dimension))
                    .unwrap_or_default();
                GeometryCollection::try_new(geometries, dim)
                    .map_err(|e| invalid(offset, e))?
                    .into()
            }
        };
        Ok(geom)
    }

    /// One coordinate: two or three numbers.
    ///
    /// The first coordinate fixes `dim` when it is not already known.
    fn coord(&mut self, dim: &mut Option<Dimension>) -> Result<Coord, ParseError> {
        let start = self.peek().map(|(offset, _)| offset).unwrap_or(self.end);
        let mut ordinates = Vec::with_capacity(3);
        while let Some((_, Token::Number(value))) = self.peek() {
            ordinates.push(value);
            self.pos += 1;
        }
        if ordinates.is_empty() {
            let found = self.next("coordinate")?;
            return self.unexpected(found, "coordinate");
        }

        let coord = Coord::from_ordinates(&ordinates).ok_or_else(|| {
            ParseError::new(
                start,
                format!("expected 2 or 3 ordinates, found {}", ordinates.len()),
            )
        })?;
        match dim {
            Some(expected) if *expected != coord.dimension() => Err(ParseError::new(
                start,
                format!(
                    "expected {} ordinates, found {}",
                    expected.size(),
                    ordinates.len()
                ),
            )),
            Some(_) => Ok(coord),
            None => {
                *dim = Some(coord.dimension());
                Ok(coord)
            }
        }
    }

    /// Comma-separated coordinates up to and including the closing `)`.
    fn coords(&mut self, dim: &mut Option<Dimension>) -> Result<Vec<Coord>, ParseError> {
        let mut coords = vec![];
        loop {
            coords.push(self.coord(dim)?);
            if !self.comma_or_close()? {
                return Ok(coords);
            }
        }
    }

    fn line_string_body(&mut self, dim: &mut Option<Dimension>) -> Result<LineString, ParseError> {
        let coords = self.coords(dim)?;
        Ok(LineString::new_unchecked(coords, dim.unwrap_or_default()))
    }

    fn polygon_body(
        &mut self,
        offset: usize,
        dim: &mut Option<Dimension>,
    ) -> Result<Polygon, ParseError> {
        let mut rings = vec![];
        loop {
            self.expect(Token::LeftParen, "'('")?;
            rings.push(self.line_string_body(dim)?);
            if !self.comma_or_close()? {
                break;
            }
        }
        Polygon::try_new(rings, dim.unwrap_or_default()).map_err(|e| invalid(offset, e))
    }

    /// A parenthesized member of a MultiLineString, or `EMPTY`.
    fn line_string(
        &mut self,
        dim: &mut Option<Dimension>,
    ) -> Result<Option<LineString>, ParseError> {
        if self.eat_keyword(Keyword::Empty) {
            return Ok(None);
        }
        self.expect(Token::LeftParen, "'(' or EMPTY")?;
        self.line_string_body(dim).map(Some)
    }

    /// A parenthesized member of a MultiPolygon, or `EMPTY`.
    fn polygon(&mut self, dim: &mut Option<Dimension>) -> Result<Option<Polygon>, ParseError> {
        let offset = self.peek().map(|(offset, _)| offset).unwrap_or(self.end);
        if self.eat_keyword(Keyword::Empty) {
            return Ok(None);
        }
        self.expect(Token::LeftParen, "'(' or EMPTY")?;
        self.polygon_body(offset, dim).map(Some)
    }

    /// Comma-separated members up to and including the closing `)`. `None` marks an `EMPTY`
    /// member, whose dimension is only known once every member has been read.
    fn members<T>(
        &mut self,
        dim: &mut Option<Dimension>,
        member: impl Fn(&mut Self, &mut Option<Dimension>) -> Result<Option<T>, ParseError>,
    ) -> Result<Vec<Option<T>>, ParseError> {
        let mut members = vec![];
        loop {
            members.push(member(self, dim)?);
            if !self.comma_or_close()? {
                return Ok(members);
            }
        }
    }

    /// Members are either `(x y)`, a bare `x y`, or `EMPTY`.
    fn multi_point_body(
        &mut self,
        offset: usize,
        dim: &mut Option<Dimension>,
    ) -> Result<MultiPoint, ParseError> {
        let members = self.members(dim, |p, dim| {
            if p.eat_keyword(Keyword::Empty) {
                return Ok(None);
            }
            if let Some((_, Token::LeftParen)) = p.peek() {
                p.pos += 1;
                let coord = p.coord(dim)?;
                p.expect(Token::RightParen, "')'")?;
                Ok(Some(Point::new_unchecked(coord)))
            } else {
                p.coord(dim).map(|coord| Some(Point::new_unchecked(coord)))
            }
        })?;
        let dim = dim.unwrap_or_default();
        let points = fill_empty(members, || Point::empty(dim));
        MultiPoint::try_new(points, dim).map_err(|e| invalid(offset, e))
    }
}

fn invalid(offset: usize, err: GeometryError) -> ParseError {
    ParseError::new(offset, err.to_string())
}

fn fill_empty<T>(members: Vec<Option<T>>, empty: impl Fn() -> T) -> Vec<T> {
    members
        .into_iter()
        .map(|member| member.unwrap_or_else(&empty))
        .collect()
}

fn empty_geometry(geometry_type: GeometryType, dim: Dimension) -> Geometry {
    match geometry_type {
        GeometryType::Point => Point::empty(dim).into(),
        GeometryType::LineString => LineString::empty(dim).into(),
        GeometryType::Polygon => Polygon::empty(dim).into(),
        GeometryType::MultiPoint => MultiPoint::empty(dim).into(),
        GeometryType::MultiLineString => MultiLineString::empty(dim).into(),
        GeometryType::MultiPolygon => MultiPolygon::empty(dim).into(),
        GeometryType::GeometryCollection => GeometryCollection::empty(dim).into(),
    }
}
