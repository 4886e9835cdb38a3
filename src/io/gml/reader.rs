use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::CodecError;
use crate::geometry::{
    Coord, Dimension, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, MAX_NESTING_DEPTH,
};

/// Each geometry level takes at most four XML levels, as in
/// `Polygon/outerBoundaryIs/LinearRing/coordinates`.
const MAX_ELEMENT_DEPTH: usize = 4 * MAX_NESTING_DEPTH;

/// An XML element with its namespace prefix removed.
#[derive(Debug)]
struct Element {
    name: String,
    /// From the `srsDimension` attribute, when present.
    dim: Option<Dimension>,
    text: String,
    children: Vec<Element>,
    self_closing: bool,
}

impl Element {
    fn from_start(start: &BytesStart<'_>, self_closing: bool) -> Result<Self, CodecError> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut dim = None;
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            if attr.key.local_name().as_ref() == b"srsDimension" {
                let value = attr.unescape_value()?;
                dim = match value.trim() {
                    "2" => Some(Dimension::XY),
                    "3" => Some(Dimension::XYZ),
                    other => {
                        return Err(CodecError::Structure(format!(
                            "unsupported srsDimension {other:?} on <{name}>"
                        )))
                    }
                };
            }
        }
        Ok(Self {
            name,
            dim,
            text: String::new(),
            children: vec![],
            self_closing,
        })
    }

    fn unexpected(&self) -> CodecError {
        CodecError::UnexpectedElement(self.name.clone())
    }

    /// The single child of a wrapper element such as `pointMember` or `LinearRing` boundaries.
    fn only_child(&self) -> Result<&Element, CodecError> {
        match self.children.as_slice() {
            [child] => Ok(child),
            _ => Err(CodecError::Structure(format!(
                "<{}> must hold exactly one element, found {}",
                self.name,
                self.children.len()
            ))),
        }
    }
}

fn read_children(
    reader: &mut Reader<&[u8]>,
    parent: &mut Element,
    depth: usize,
) -> Result<(), CodecError> {
    if depth > MAX_ELEMENT_DEPTH {
        return Err(CodecError::Structure(format!(
            "elements nested deeper than {MAX_ELEMENT_DEPTH} levels"
        )));
    }
    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let mut child = Element::from_start(&start, false)?;
                read_children(reader, &mut child, depth + 1)?;
                parent.children.push(child);
            }
            Event::Empty(start) => parent.children.push(Element::from_start(&start, true)?),
            Event::Text(text) => parent.text.push_str(&text.unescape()?),
            Event::CData(text) => parent.text.push_str(&String::from_utf8_lossy(&text)),
            // Closing tags are matched by the reader
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(CodecError::Structure(format!(
                    "document ended inside <{}>",
                    parent.name
                )))
            }
            _ => {}
        }
    }
}

/// Read the single root element of a GML fragment.
fn read_root(text: &str) -> Result<Element, CodecError> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut root = None;
    loop {
        match reader.read_event()? {
            Event::Start(start) | Event::Empty(start) if root.is_some() => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                return Err(CodecError::Structure(format!(
                    "unexpected <{name}> after the geometry"
                )));
            }
            Event::Start(start) => {
                let mut element = Element::from_start(&start, false)?;
                read_children(&mut reader, &mut element, 1)?;
                root = Some(element);
            }
            Event::Empty(start) => root = Some(Element::from_start(&start, true)?),
            Event::Text(_) | Event::CData(_) => {
                return Err(CodecError::Structure(
                    "text outside of a geometry element".to_string(),
                ))
            }
            Event::Eof => break,
            _ => {}
        }
    }
    root.ok_or_else(|| CodecError::Structure("document has no geometry element".to_string()))
}

/// Parse one finite ordinate.
fn parse_number(text: &str) -> Result<f64, CodecError> {
    match lexical_core::parse::<f64>(text.as_bytes()) {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CodecError::InvalidNumber(text.to_string())),
    }
}

fn coord_from_ordinates(ordinates: &[f64], text: &str) -> Result<Coord, CodecError> {
    Coord::from_ordinates(ordinates).ok_or_else(|| {
        CodecError::Structure(format!(
            "expected 2 or 3 ordinates per coordinate, found {} in {text:?}",
            ordinates.len()
        ))
    })
}

/// Parse the coordinates held by `elem`: `gml:coordinates`, `gml:pos` or `gml:posList`.
///
/// `dim` comes from the nearest `srsDimension` and is required to split `pos`/`posList`.
fn parse_coords(elem: &Element, dim: Option<Dimension>) -> Result<Vec<Coord>, CodecError> {
    if let Some(child) = elem.children.first() {
        return Err(child.unexpected());
    }
    let dim = elem.dim.or(dim);
    match elem.name.as_str() {
        "coordinates" => elem
            .text
            .split_whitespace()
            .map(|tuple| {
                let ordinates = tuple
                    .split(',')
                    .map(parse_number)
                    .collect::<Result<Vec<_>, _>>()?;
                coord_from_ordinates(&ordinates, tuple)
            })
            .collect(),
        "pos" | "posList" => {
            let ordinates = elem
                .text
                .split_whitespace()
                .map(parse_number)
                .collect::<Result<Vec<_>, _>>()?;
            let size = match (dim, elem.name.as_str()) {
                (Some(dim), _) => dim.size(),
                (None, "pos") => ordinates.len(),
                (None, _) => 2,
            };
            if size == 0 || ordinates.len() % size != 0 {
                return Err(CodecError::Structure(format!(
                    "<{}> holds {} ordinates, not a multiple of {size}",
                    elem.name,
                    ordinates.len()
                )));
            }
            ordinates
                .chunks(size)
                .map(|chunk| coord_from_ordinates(chunk, &elem.text))
                .collect()
        }
        _ => Err(elem.unexpected()),
    }
}

/// Coordinates from every `pos` child, or from a single `coordinates`/`posList` child.
fn element_coords(elem: &Element, dim: Option<Dimension>) -> Result<Vec<Coord>, CodecError> {
    if elem.children.is_empty() {
        return Err(CodecError::Structure(format!(
            "<{}> has no coordinates",
            elem.name
        )));
    }
    if elem.children.iter().all(|child| child.name == "pos") {
        let mut coords = vec![];
        for child in &elem.children {
            coords.extend(parse_coords(child, dim)?);
        }
        Ok(coords)
    } else {
        parse_coords(elem.only_child()?, dim)
    }
}

/// The dimension declared on the element, else the first coordinate's, else 2D.
fn resolve_dim(declared: Option<Dimension>, coords: &[Coord]) -> Dimension {
    declared
        .or_else(|| coords.first().map(Coord::dimension))
        .unwrap_or_default()
}

fn read_point(elem: &Element, dim: Option<Dimension>) -> Result<Point, CodecError> {
    let dim = elem.dim.or(dim);
    if elem.self_closing {
        return Ok(Point::empty(dim.unwrap_or_default()));
    }
    let coords = element_coords(elem, dim)?;
    match coords.as_slice() {
        [coord] => {
            resolve_dim(dim, &coords).check(coord.dimension())?;
            Ok(Point::try_new(*coord)?)
        }
        _ => Err(CodecError::Structure(format!(
            "<Point> must hold one coordinate, found {}",
            coords.len()
        ))),
    }
}

fn read_line_string(elem: &Element, dim: Option<Dimension>) -> Result<LineString, CodecError> {
    let dim = elem.dim.or(dim);
    if elem.self_closing {
        return Ok(LineString::empty(dim.unwrap_or_default()));
    }
    let coords = element_coords(elem, dim)?;
    let dim = resolve_dim(dim, &coords);
    Ok(LineString::try_new(coords, dim)?)
}

fn read_polygon(elem: &Element, dim: Option<Dimension>) -> Result<Polygon, CodecError> {
    let dim = elem.dim.or(dim);
    if elem.self_closing {
        return Ok(Polygon::empty(dim.unwrap_or_default()));
    }

    let mut rings = vec![];
    for (i, boundary) in elem.children.iter().enumerate() {
        match (i, boundary.name.as_str()) {
            (0, "outerBoundaryIs" | "exterior") => {}
            (0, "innerBoundaryIs" | "interior") => {
                return Err(CodecError::Structure(
                    "<Polygon> must start with its outer boundary".to_string(),
                ))
            }
            (_, "innerBoundaryIs" | "interior") => {}
            _ => return Err(boundary.unexpected()),
        }
        let ring = boundary.only_child()?;
        if ring.name != "LinearRing" {
            return Err(ring.unexpected());
        }
        let ring_dim = ring.dim.or(dim);
        let coords = element_coords(ring, ring_dim)?;
        let ring_dim = resolve_dim(ring_dim, &coords);
        rings.push(LineString::try_new(coords, ring_dim)?);
    }
    if rings.is_empty() {
        return Err(CodecError::Structure(
            "<Polygon> has no outer boundary".to_string(),
        ));
    }

    let dim = dim.unwrap_or_else(|| rings[0].dimension());
    Ok(Polygon::try_new(rings, dim)?)
}

/// The member elements of a collection, unwrapping `fooMember` and `fooMembers` wrappers.
fn members<'a>(
    elem: &'a Element,
    single: &str,
    plural: &str,
) -> Result<Vec<&'a Element>, CodecError> {
    let mut out = vec![];
    for child in &elem.children {
        if child.name == single {
            out.push(child.only_child()?);
        } else if child.name == plural {
            out.extend(child.children.iter());
        } else {
            return Err(child.unexpected());
        }
    }
    Ok(out)
}

fn expect_name(elem: &Element, name: &str) -> Result<(), CodecError> {
    if elem.name == name {
        Ok(())
    } else {
        Err(elem.unexpected())
    }
}

fn read_geometry(
    elem: &Element,
    dim: Option<Dimension>,
    depth: usize,
) -> Result<Geometry, CodecError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(CodecError::Structure(format!(
            "geometries nested deeper than {MAX_NESTING_DEPTH} levels"
        )));
    }
    let dim = elem.dim.or(dim);
    let geom: Geometry = match elem.name.as_str() {
        "Point" => read_point(elem, dim)?.into(),
        "LineString" => read_line_string(elem, dim)?.into(),
        "Polygon" => read_polygon(elem, dim)?.into(),
        "MultiPoint" => {
            let points = members(elem, "pointMember", "pointMembers")?
                .into_iter()
                .map(|child| expect_name(child, "Point").and_then(|_| read_point(child, dim)))
                .collect::<Result<Vec<_>, _>>()?;
            let dim = dim.or_else(|| points.first().map(Point::dimension));
            MultiPoint::try_new(points, dim.unwrap_or_default())?.into()
        }
        "MultiLineString" => {
            let line_strings = members(elem, "lineStringMember", "lineStringMembers")?
                .into_iter()
                .map(|child| {
                    expect_name(child, "LineString").and_then(|_| read_line_string(child, dim))
                })
                .collect::<Result<Vec<_>, _>>()?;
            let dim = dim.or_else(|| line_strings.first().map(LineString::dimension));
            MultiLineString::try_new(line_strings, dim.unwrap_or_default())?.into()
        }
        "MultiPolygon" => {
            let polygons = members(elem, "polygonMember", "polygonMembers")?
                .into_iter()
                .map(|child| expect_name(child, "Polygon").and_then(|_| read_polygon(child, dim)))
                .collect::<Result<Vec<_>, _>>()?;
            let dim = dim.or_else(|| polygons.first().map(Polygon::dimension));
            MultiPolygon::try_new(polygons, dim.unwrap_or_default())?.into()
        }
        "MultiGeometry" => {
            let geometries = members(elem, "geometryMember", "geometryMembers")?
                .into_iter()
                .map(|child| read_geometry(child, dim, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            let dim = dim.or_else(|| geometries.first().map(Geometry::dimension));
            GeometryCollection::try_new(geometries, dim.unwrap_or_default())?.into()
        }
        _ => return Err(elem.unexpected()),
    };
    Ok(geom)
}

/// Parse a GML geometry fragment.
///
/// Namespace prefixes are ignored, so `<gml:Point>` and `<Point>` are equivalent, as are unknown
/// attributes such as `srsName` and `xmlns:gml`.
pub fn from_gml(text: &str) -> Result<Geometry, CodecError> {
    let root = read_root(text)?;
    read_geometry(&root, None, 0)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeometryError;
    use crate::geometry::GeometryType;

    #[test]
    fn point() {
        let geom =
            from_gml("<gml:Point><gml:coordinates>47,19.2</gml:coordinates></gml:Point>").unwrap();
        assert_eq!(geom, Point::try_new(Coord::xy(47., 19.2)).unwrap().into());
    }

    #[test]
    fn gml3_vocabulary() {
        let text = r#"<gml:Polygon xmlns:gml="http://www.opengis.net/gml" srsName="EPSG:4326">
            <gml:exterior><gml:LinearRing>
                <gml:posList>0 0 4 0 4 4 0 0</gml:posList>
            </gml:LinearRing></gml:exterior>
        </gml:Polygon>"#;
        let geom = from_gml(text).unwrap();
        assert_eq!(geom.geometry_type(), GeometryType::Polygon);
        assert_eq!(geom.num_coords(), 4);

        let geom = from_gml(r#"<Point srsDimension="3"><pos>1 2 3</pos></Point>"#).unwrap();
        assert_eq!(geom, Point::try_new(Coord::xyz(1., 2., 3.)).unwrap().into());
    }

    #[test]
    fn empty_elements() {
        let geom = from_gml(r#"<gml:MultiPolygon srsDimension="3"/>"#).unwrap();
        assert!(geom.is_empty());
        assert_eq!(geom.dimension(), Dimension::XYZ);
    }

    #[test]
    fn errors() {
        assert!(matches!(
            from_gml("<gml:Circle><gml:coordinates>1,2</gml:coordinates></gml:Circle>"),
            Err(CodecError::UnexpectedElement(name)) if name == "Circle"
        ));
        assert!(matches!(
            from_gml("<gml:Point><gml:coordinates>1,x</gml:coordinates></gml:Point>"),
            Err(CodecError::InvalidNumber(text)) if text == "x"
        ));
        assert!(matches!(
            from_gml("<gml:Polygon></gml:Polygon>"),
            Err(CodecError::Structure(_))
        ));
        assert!(matches!(
            from_gml("<gml:Point><gml:coordinates>1,2</gml:coordinates>"),
            Err(CodecError::Structure(_) | CodecError::Xml(_))
        ));
        assert!(matches!(
            from_gml("<gml:Point><gml:coordinates>1</gml:coordinates></gml:Point>"),
            Err(CodecError::Structure(_))
        ));
        assert!(matches!(from_gml(""), Err(CodecError::Structure(_))));
    }

    #[test]
    fn non_finite_ordinates() {
        assert!(matches!(
            from_gml("<gml:Point><gml:coordinates>NaN,inf</gml:coordinates></gml:Point>"),
            Err(CodecError::InvalidNumber(text)) if text == "NaN"
        ));
        assert!(matches!(
            from_gml("<gml:LineString><gml:posList>0 0 1 inf</gml:posList></gml:LineString>"),
            Err(CodecError::InvalidNumber(text)) if text == "inf"
        ));
        assert!(matches!(
            from_gml("<Point><pos>1e400 2</pos></Point>"),
            Err(CodecError::InvalidNumber(_))
        ));
    }

    #[test]
    fn open_ring() {
        let text = "<gml:Polygon><gml:outerBoundaryIs><gml:LinearRing>\
            <gml:coordinates>0,0 1,0 1,1 0,1</gml:coordinates>\
            </gml:LinearRing></gml:outerBoundaryIs></gml:Polygon>";
        assert!(matches!(
            from_gml(text),
            Err(CodecError::InvalidGeometry(GeometryError::RingNotClosed))
        ));
    }

    #[test]
    fn mixed_dimensions() {
        let text = "<gml:MultiPoint>\
            <gml:pointMember><gml:Point><gml:coordinates>1,2</gml:coordinates></gml:Point></gml:pointMember>\
            <gml:pointMember><gml:Point><gml:coordinates>1,2,3</gml:coordinates></gml:Point></gml:pointMember>\
            </gml:MultiPoint>";
        assert!(matches!(
            from_gml(text),
            Err(CodecError::InvalidGeometry(
                GeometryError::DimensionMismatch { .. }
            ))
        ));
    }
}
