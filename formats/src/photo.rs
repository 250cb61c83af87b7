//! Extraction of a position from the orientation metadata embedded in a photo.
//!
//! Coordinates are stored as three rational components (degrees, minutes, seconds)
//! in the GPS tag group, with the hemisphere carried by a separate reference tag.
//! A photo without a GPS tag group is a perfectly valid "no location" outcome and
//! is distinct from a blob we can not parse as an image container at all.
//!

use std::io::Cursor;

use exif::{Exif, In, Reader, Tag, Value};
use tracing::trace;

use crate::{Coordinate, ExtractError};

/// Read the embedded GPS tag groups of an image and return the decoded position.
///
/// Returns `Ok(None)` when the container carries no usable GPS group (missing
/// latitude or longitude), `ExtractError::MetadataRead` when the bytes are not
/// an image container we know how to read.
///
#[tracing::instrument(skip(data))]
pub fn from_exif(data: &[u8]) -> Result<Option<Coordinate>, ExtractError> {
    let mut cur = Cursor::new(data);
    let exif = match Reader::new().read_from_container(&mut cur) {
        Ok(exif) => exif,
        // A container without an Exif segment is "no location", not an error.
        //
        Err(exif::Error::NotFound(_)) => return Ok(None),
        Err(e) => return Err(ExtractError::MetadataRead(e)),
    };
    let coord = coordinate_from(&exif);
    trace!("exif coord = {coord:?}");
    Ok(coord)
}

/// Assemble the position out of the four GPS fields.
///
fn coordinate_from(exif: &Exif) -> Option<Coordinate> {
    let (d, m, s) = dms(exif, Tag::GPSLatitude)?;
    let lat = signed(dms_to_decimal(d, m, s), hemisphere(exif, Tag::GPSLatitudeRef));

    let (d, m, s) = dms(exif, Tag::GPSLongitude)?;
    let lng = signed(dms_to_decimal(d, m, s), hemisphere(exif, Tag::GPSLongitudeRef));

    Coordinate::new(lat, lng).ok()
}

/// Convert a (degrees, minutes, seconds) triple into decimal degrees.
///
#[inline]
pub fn dms_to_decimal(deg: f64, min: f64, sec: f64) -> f64 {
    deg + min / 60. + sec / 3600.
}

/// Fetch the three rational components of a directional tag.
///
fn dms(exif: &Exif, tag: Tag) -> Option<(f64, f64, f64)> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::Rational(r) if r.len() >= 3 => {
            Some((r[0].to_f64(), r[1].to_f64(), r[2].to_f64()))
        }
        _ => None,
    }
}

/// Fetch the hemisphere letter of a reference tag ("N"/"S"/"E"/"W").
///
fn hemisphere(exif: &Exif, tag: Tag) -> Option<char> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::Ascii(v) => v.first().and_then(|s| s.first()).map(|b| *b as char),
        _ => None,
    }
}

/// South and West are the negative hemispheres, a missing reference tag is
/// taken as positive.
///
fn signed(value: f64, hemisphere: Option<char>) -> f64 {
    match hemisphere {
        Some('S') | Some('s') | Some('W') | Some('w') => -value,
        _ => value,
    }
}
