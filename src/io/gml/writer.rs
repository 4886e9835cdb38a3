use std::io::Write;

use itertools::Itertools;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::CodecError;
use crate::geometry::{
    Coord, Dimension, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// `x,y x,y` with every ordinate in its shortest round-trip form.
fn format_coords<'a>(coords: impl IntoIterator<Item = &'a Coord>) -> String {
    coords
        .into_iter()
        .map(|coord| coord.ordinates().join(","))
        .join(" ")
}

/// Streams GML elements for a geometry into an XML writer.
pub(crate) struct GmlWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> GmlWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self {
            writer: Writer::new(inner),
        }
    }

    pub(crate) fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn start(&mut self, name: &str) -> Result<(), CodecError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<(), CodecError> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Open a geometry element, or write it self-closed when the geometry is empty.
    ///
    /// Returns `false` when the element was self-closed.
    fn start_geometry(
        &mut self,
        name: &str,
        dim: Dimension,
        is_empty: bool,
    ) -> Result<bool, CodecError> {
        let mut start = BytesStart::new(name);
        if dim == Dimension::XYZ {
            start.push_attribute(("srsDimension", "3"));
        }
        if is_empty {
            self.writer.write_event(Event::Empty(start))?;
            Ok(false)
        } else {
            self.writer.write_event(Event::Start(start))?;
            Ok(true)
        }
    }

    fn write_coordinates<'a>(
        &mut self,
        coords: impl IntoIterator<Item = &'a Coord>,
    ) -> Result<(), CodecError> {
        self.start("gml:coordinates")?;
        let text = format_coords(coords);
        self.writer.write_event(Event::Text(BytesText::new(&text)))?;
        self.end("gml:coordinates")
    }

    pub(crate) fn write_point(&mut self, point: &Point) -> Result<(), CodecError> {
        if self.start_geometry("gml:Point", point.dimension(), point.is_empty())? {
            self.write_coordinates(point.coord())?;
            self.end("gml:Point")?;
        }
        Ok(())
    }

    pub(crate) fn write_line_string(&mut self, line_string: &LineString) -> Result<(), CodecError> {
        let dim = line_string.dimension();
        if self.start_geometry("gml:LineString", dim, line_string.is_empty())? {
            self.write_coordinates(line_string.coords())?;
            self.end("gml:LineString")?;
        }
        Ok(())
    }

    fn write_linear_ring(&mut self, boundary: &str, ring: &LineString) -> Result<(), CodecError> {
        self.start(boundary)?;
        self.start("gml:LinearRing")?;
        self.write_coordinates(ring.coords())?;
        self.end("gml:LinearRing")?;
        self.end(boundary)
    }

    pub(crate) fn write_polygon(&mut self, polygon: &Polygon) -> Result<(), CodecError> {
        if self.start_geometry("gml:Polygon", polygon.dimension(), polygon.is_empty())? {
            if let Some(exterior) = polygon.exterior() {
                self.write_linear_ring("gml:outerBoundaryIs", exterior)?;
            }
            for interior in polygon.interiors() {
                self.write_linear_ring("gml:innerBoundaryIs", interior)?;
            }
            self.end("gml:Polygon")?;
        }
        Ok(())
    }

    pub(crate) fn write_multi_point(&mut self, multi_point: &MultiPoint) -> Result<(), CodecError> {
        let dim = multi_point.dimension();
        if self.start_geometry("gml:MultiPoint", dim, multi_point.is_empty())? {
            for point in multi_point.points() {
                self.start("gml:pointMember")?;
                self.write_point(point)?;
                self.end("gml:pointMember")?;
            }
            self.end("gml:MultiPoint")?;
        }
        Ok(())
    }

    pub(crate) fn write_multi_line_string(
        &mut self,
        multi_line_string: &MultiLineString,
    ) -> Result<(), CodecError> {
        let dim = multi_line_string.dimension();
        if self.start_geometry("gml:MultiLineString", dim, multi_line_string.is_empty())? {
            for line_string in multi_line_string.line_strings() {
                self.start("gml:lineStringMember")?;
                self.write_line_string(line_string)?;
                self.end("gml:lineStringMember")?;
            }
            self.end("gml:MultiLineString")?;
        }
        Ok(())
    }

    pub(crate) fn write_multi_polygon(
        &mut self,
        multi_polygon: &MultiPolygon,
    ) -> Result<(), CodecError> {
        let dim = multi_polygon.dimension();
        if self.start_geometry("gml:MultiPolygon", dim, multi_polygon.is_empty())? {
            for polygon in multi_polygon.polygons() {
                self.start("gml:polygonMember")?;
                self.write_polygon(polygon)?;
                self.end("gml:polygonMember")?;
            }
            self.end("gml:MultiPolygon")?;
        }
        Ok(())
    }

    pub(crate) fn write_geometry_collection(
        &mut self,
        geometry_collection: &GeometryCollection,
    ) -> Result<(), CodecError> {
        let dim = geometry_collection.dimension();
        if self.start_geometry("gml:MultiGeometry", dim, geometry_collection.is_empty())? {
            for geom in geometry_collection.geometries() {
                self.start("gml:geometryMember")?;
                self.write_geometry(geom)?;
                self.end("gml:geometryMember")?;
            }
            self.end("gml:MultiGeometry")?;
        }
        Ok(())
    }

    pub(crate) fn write_geometry(&mut self, geom: &Geometry) -> Result<(), CodecError> {
        match geom {
            Geometry::Point(g) => self.write_point(g),
            Geometry::LineString(g) => self.write_line_string(g),
            Geometry::Polygon(g) => self.write_polygon(g),
            Geometry::MultiPoint(g) => self.write_multi_point(g),
            Geometry::MultiLineString(g) => self.write_multi_line_string(g),
            Geometry::MultiPolygon(g) => self.write_multi_polygon(g),
            Geometry::GeometryCollection(g) => self.write_geometry_collection(g),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{linestring, multipoint, polygon};

    fn gml(geom: impl Into<Geometry>) -> String {
        let mut writer = GmlWriter::new(Vec::new());
        writer.write_geometry(&geom.into()).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn point() {
        assert_eq!(
            gml(Point::try_new(Coord::xy(47., 19.2)).unwrap()),
            "<gml:Point><gml:coordinates>47,19.2</gml:coordinates></gml:Point>"
        );
        assert_eq!(gml(Point::empty(Dimension::XY)), "<gml:Point/>");
        assert_eq!(
            gml(Point::empty(Dimension::XYZ)),
            r#"<gml:Point srsDimension="3"/>"#
        );
    }

    #[test]
    fn line_string_z() {
        assert_eq!(
            gml(linestring::ls_z()),
            r#"<gml:LineString srsDimension="3"><gml:coordinates>0,1,2 -1.5,2.25,0.0000001</gml:coordinates></gml:LineString>"#
        );
    }

    #[test]
    fn polygon_boundaries() {
        let out = gml(polygon::p1());
        assert!(out.starts_with(
            "<gml:Polygon><gml:outerBoundaryIs><gml:LinearRing><gml:coordinates>0,0 4,0 4,4 0,4 0,0<"
        ));
        assert_eq!(out.matches("<gml:innerBoundaryIs>").count(), 1);
        assert!(out.ends_with("</gml:innerBoundaryIs></gml:Polygon>"));
    }

    #[test]
    fn multi_point_with_empty_member() {
        assert_eq!(
            gml(multipoint::mp_with_empty()),
            "<gml:MultiPoint><gml:pointMember><gml:Point/></gml:pointMember>\
             <gml:pointMember><gml:Point><gml:coordinates>3,4</gml:coordinates></gml:Point></gml:pointMember>\
             <gml:pointMember><gml:Point><gml:coordinates>5,6</gml:coordinates></gml:Point></gml:pointMember>\
             </gml:MultiPoint>"
        );
    }
}
