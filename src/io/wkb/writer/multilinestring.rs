use std::io::Write;

use crate::error::CodecError;
use crate::geometry::{GeometryType, MultiLineString};
use crate::io::wkb::common::{WKBType, WkbByteOrder, HEADER_BYTES};
use crate::io::wkb::writer::{
    line_string_wkb_size, write_count, write_header, write_line_string_as_wkb,
};

/// The byte length of a WKBMultiLineString
pub fn multi_line_string_wkb_size(geom: &MultiLineString) -> usize {
    let mut sum = HEADER_BYTES + 4;
    for line_string in geom.line_strings() {
        sum += line_string_wkb_size(line_string);
    }
    sum
}

/// Write a MultiLineString geometry to a Writer encoded as WKB
pub fn write_multi_line_string_as_wkb<W: Write, B: WkbByteOrder>(
    writer: &mut W,
    geom: &MultiLineString,
) -> Result<(), CodecError> {
    write_header::<W, B>(
        writer,
        WKBType::new(GeometryType::MultiLineString, geom.dimension()),
    )?;

    // numLineStrings
    write_count::<W, B>(writer, geom.len())?;

    for line_string in geom.line_strings() {
        write_line_string_as_wkb::<W, B>(writer, line_string)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geo::multi_line_string_to_geo;
    use crate::test::multilinestring::ml0;
    use byteorder::LittleEndian;
    use geozero::{CoordDimensions, ToWkb};

    #[test]
    fn matches_geozero() {
        let geom = ml0();
        let mut buf = vec![];
        write_multi_line_string_as_wkb::<_, LittleEndian>(&mut buf, &geom).unwrap();

        let expected = geo::Geometry::MultiLineString(multi_line_string_to_geo(&geom))
            .to_wkb(CoordDimensions::xy())
            .unwrap();
        assert_eq!(buf, expected);
        assert_eq!(multi_line_string_wkb_size(&geom), buf.len());
    }
}
