use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use num_enum::TryFromPrimitive;

use crate::error::{PostgisError, Result};
use crate::io::ewkb::common::{Endianness, WKBType, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG};
use crate::point::Point;

/// The header preceding the ordinates of an EWKB geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EwkbHeader {
    /// Byte order of every multi-byte field after the flag
    pub byte_order: Endianness,
    /// The raw type word, including the EWKB Z, M and SRID flags
    pub type_id: u32,
    /// The SRID, present only when the SRID flag is set
    pub srid: Option<i32>,
}

impl EwkbHeader {
    /// Whether Z ordinates follow X and Y.
    pub fn has_z(&self) -> bool {
        self.type_id & EWKB_Z_FLAG != 0
    }

    /// Whether M ordinates follow X and Y (and Z).
    pub fn has_m(&self) -> bool {
        self.type_id & EWKB_M_FLAG != 0
    }

    /// The geometry type named by the type word, ignoring dimension and SRID flags.
    ///
    /// Reading a point never calls this; it is here for callers that want to reject
    /// geometries that are not points.
    pub fn geometry_type(&self) -> Result<WKBType> {
        // ISO WKB uses 1000/2000/3000 offsets instead of flags for Z/M/ZM
        let base = (self.type_id & !(EWKB_Z_FLAG | EWKB_M_FLAG | EWKB_SRID_FLAG)) % 1000;
        WKBType::try_from_primitive(base)
            .map_err(|_| PostgisError::UnsupportedGeometryType(self.type_id))
    }
}

struct EwkbReader<'a> {
    cursor: Cursor<&'a [u8]>,
    byte_order: Endianness,
}

impl<'a> EwkbReader<'a> {
    fn read_u32(&mut self, field: &'static str) -> Result<u32> {
        match self.byte_order {
            Endianness::BigEndian => self.cursor.read_u32::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_u32::<LittleEndian>(),
        }
        .map_err(|_| PostgisError::TruncatedInput(field))
    }

    fn read_i32(&mut self, field: &'static str) -> Result<i32> {
        match self.byte_order {
            Endianness::BigEndian => self.cursor.read_i32::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_i32::<LittleEndian>(),
        }
        .map_err(|_| PostgisError::TruncatedInput(field))
    }

    fn read_f64(&mut self, field: &'static str) -> Result<f64> {
        match self.byte_order {
            Endianness::BigEndian => self.cursor.read_f64::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_f64::<LittleEndian>(),
        }
        .map_err(|_| PostgisError::TruncatedInput(field))
    }
}

/// Read an EWKB point and the header in front of it.
///
/// The layout is a byte order flag, a `u32` type word, an `i32` SRID when the SRID flag is
/// set, then the X (longitude) and Y (latitude) ordinates. The type word is not checked, and
/// any Z or M ordinates and trailing bytes are ignored.
pub fn read_point_with_header(buf: &[u8]) -> Result<(EwkbHeader, Point)> {
    let mut cursor = Cursor::new(buf);
    let flag = cursor
        .read_u8()
        .map_err(|_| PostgisError::TruncatedInput("byte order"))?;
    let byte_order = Endianness::try_from(flag)?;
    let mut reader = EwkbReader { cursor, byte_order };

    let type_id = reader.read_u32("geometry type")?;
    let srid = if type_id & EWKB_SRID_FLAG != 0 {
        Some(reader.read_i32("SRID")?)
    } else {
        None
    };
    let header = EwkbHeader {
        byte_order,
        type_id,
        srid,
    };

    let lng = reader.read_f64("X ordinate")?;
    let lat = reader.read_f64("Y ordinate")?;
    Ok((header, Point::new(lat, lng)))
}

/// Read an EWKB point.
pub fn read_point(buf: &[u8]) -> Result<Point> {
    read_point_with_header(buf).map(|(_, point)| point)
}

/// Read a hex encoded EWKB point. Hex digits may be either case.
pub fn read_hex_point(hex: &[u8]) -> Result<Point> {
    read_point(&hex::decode(hex)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point::{
        p1, BE_POINT_HEX, LE_LINESTRING_HEX, LE_NO_SRID_HEX, LE_POINT_HEX, LE_POINT_Z_HEX,
    };

    fn bytes(hex: &str) -> Vec<u8> {
        hex::decode(hex).unwrap()
    }

    #[test]
    fn little_endian_with_srid() {
        let (header, point) = read_point_with_header(&bytes(LE_POINT_HEX)).unwrap();
        assert_eq!(point.lng, 2.0);
        assert_eq!(point.lat, 1.0);
        assert_eq!(header.byte_order, Endianness::LittleEndian);
        assert_eq!(header.type_id, 0x2000_0001);
        assert_eq!(header.srid, Some(4325));
        assert_eq!(header.geometry_type().unwrap(), WKBType::Point);
    }

    #[test]
    fn big_endian_with_srid() {
        let (header, point) = read_point_with_header(&bytes(BE_POINT_HEX)).unwrap();
        assert_eq!(point, p1());
        assert_eq!(header.byte_order, Endianness::BigEndian);
        assert_eq!(header.srid, Some(4326));
    }

    #[test]
    fn without_srid() {
        let (header, point) = read_point_with_header(&bytes(LE_NO_SRID_HEX)).unwrap();
        assert_eq!(point, p1());
        assert_eq!(header.srid, None);
    }

    #[test]
    fn z_ordinate_is_ignored() {
        let (header, point) = read_point_with_header(&bytes(LE_POINT_Z_HEX)).unwrap();
        assert_eq!(point, p1());
        assert!(header.has_z());
        assert!(!header.has_m());
        assert_eq!(header.geometry_type().unwrap(), WKBType::Point);
    }

    #[test]
    fn type_word_is_not_validated() {
        let (header, point) = read_point_with_header(&bytes(LE_LINESTRING_HEX)).unwrap();
        assert_eq!(header.geometry_type().unwrap(), WKBType::LineString);
        // the vertex count and first ordinate are read as if they were X and Y
        assert_ne!(point, p1());
    }

    #[test]
    fn unknown_geometry_type() {
        let header = EwkbHeader {
            byte_order: Endianness::LittleEndian,
            type_id: 17,
            srid: None,
        };
        assert!(matches!(
            header.geometry_type(),
            Err(PostgisError::UnsupportedGeometryType(17))
        ));
    }

    #[test]
    fn invalid_byte_order() {
        let mut buf = bytes(LE_POINT_HEX);
        buf[0] = 2;
        assert!(matches!(
            read_point(&buf),
            Err(PostgisError::InvalidByteOrder(2))
        ));
    }

    #[test]
    fn every_truncation_is_rejected() {
        let buf = bytes(LE_POINT_HEX);
        assert_eq!(buf.len(), 25);
        for len in 0..buf.len() {
            let err = read_point(&buf[..len]).unwrap_err();
            assert!(
                matches!(err, PostgisError::TruncatedInput(_)),
                "length {len}: {err}"
            );
        }
    }

    #[test]
    fn truncation_names_the_field() {
        let buf = bytes(LE_POINT_HEX);
        let err = read_point(&buf[..20]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Truncated EWKB input: not enough bytes to read X ordinate"
        );
        assert!(matches!(
            read_point(&[]),
            Err(PostgisError::TruncatedInput("byte order"))
        ));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut buf = bytes(LE_POINT_HEX);
        buf.extend_from_slice(&[0xff; 4]);
        assert_eq!(read_point(&buf).unwrap(), p1());
    }

    #[test]
    fn hex_invalid_character() {
        let err = read_hex_point(b"0101000020E5100000zz").unwrap_err();
        assert!(matches!(
            err,
            PostgisError::Hex(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 18 })
        ));
    }

    #[test]
    fn hex_odd_length() {
        let err = read_hex_point(b"0101000020E").unwrap_err();
        assert!(matches!(err, PostgisError::Hex(hex::FromHexError::OddLength)));
        assert!(err.to_string().starts_with("Hex decode error: "));
    }

    #[test]
    fn hex_empty_is_truncated() {
        assert!(matches!(
            read_hex_point(b""),
            Err(PostgisError::TruncatedInput("byte order"))
        ));
    }

    #[test]
    fn hex_mixed_case() {
        let lower = LE_POINT_HEX.to_lowercase();
        assert_eq!(read_hex_point(lower.as_bytes()).unwrap(), p1());

        let mixed = "0101000020e51000000000000000000040000000000000f03F";
        assert_eq!(read_hex_point(mixed.as_bytes()).unwrap(), p1());
    }

    #[test]
    fn floats_pass_through_exactly() {
        let lat = 52.370216f64;
        let lng = 4.895168f64;
        let mut buf = vec![1u8];
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&lng.to_le_bytes());
        buf.extend_from_slice(&lat.to_le_bytes());

        let point = read_point(&buf).unwrap();
        assert_eq!(point.lat.to_bits(), lat.to_bits());
        assert_eq!(point.lng.to_bits(), lng.to_bits());
    }
}
