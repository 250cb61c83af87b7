//! Extraction of a position from a resource locator whose filename encodes it.
//!
//! The upstream filename sanitizer writes `<prefix>,<lat>,<lng>` with literal
//! underscores standing in for decimal points, so `13_5,35_123,139_456.jpg`
//! decodes to (35.123, 139.456).  The first token is an upstream artefact and
//! is ignored.
//!

use percent_encoding::percent_decode_str;
use tracing::trace;

use crate::{Coordinate, ExtractError};

/// Decode the coordinate pair encoded in the filename part of a locator.
///
/// Query string and fragment are stripped, then the last path segment is
/// percent-decoded and its extension removed before the underscore
/// substitution and the comma split.
///
/// Anything that does not yield two finite floats in tokens 2 and 3 is an
/// `InvalidCoordinateFormat` error.
///
#[tracing::instrument]
pub fn from_locator(url: &str) -> Result<Coordinate, ExtractError> {
    let bad = || ExtractError::InvalidCoordinateFormat(url.to_string());

    // Down to the filename
    //
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);
    let segment = percent_decode_str(segment)
        .decode_utf8()
        .map_err(|_| bad())?;

    // Extension off first, then the underscore substitution
    //
    let stem = match segment.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => segment.as_ref(),
    };
    let stem = stem.replace('_', ".");
    trace!("stem = {stem}");

    let tokens: Vec<&str> = stem.split(',').collect();
    if tokens.len() < 3 {
        return Err(bad());
    }

    let lat = tokens[1].parse::<f64>().map_err(|_| bad())?;
    let lng = tokens[2].parse::<f64>().map_err(|_| bad())?;

    Coordinate::new(lat, lng)
}

/// Legacy behaviour of the extraction path: any failure degrades to the (0, 0)
/// sentinel instead of surfacing.  Indistinguishable from a legitimate
/// near-origin position, kept only for the publication flow that predates the
/// strict API.
///
pub fn from_locator_lossy(url: &str) -> Coordinate {
    from_locator(url).unwrap_or(Coordinate::ORIGIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_from_locator_basic() {
        let c = from_locator("https://cdn.example.net/photos/13_5,35_123,139_456.jpg").unwrap();
        assert!((c.lat - 35.123).abs() < 1e-9);
        assert!((c.lng - 139.456).abs() < 1e-9);
    }

    #[test]
    fn test_from_locator_strips_query() {
        let c = from_locator("https://x.test/a/b/p,1_5,103_8.png?alt=media&token=abc").unwrap();
        assert!((c.lat - 1.5).abs() < 1e-9);
        assert!((c.lng - 103.8).abs() < 1e-9);
    }

    #[test]
    fn test_from_locator_percent_encoded() {
        // %2C is the sanitizer's comma when it round-trips through a URL
        //
        let c = from_locator("https://x.test/p%2C35_0%2C139_0.jpg").unwrap();
        assert!((c.lat - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_locator_no_extension() {
        let c = from_locator("https://x.test/p,35_5,139_5").unwrap();
        assert!((c.lat - 35.5).abs() < 1e-9);
    }

    #[rstest]
    #[case("https://x.test/nocommas.jpg")]
    #[case("https://x.test/p,abc,139_456.jpg")]
    #[case("https://x.test/p,35_123,def.jpg")]
    #[case("https://x.test/p,35_123.jpg")]
    #[case("")]
    fn test_from_locator_malformed(#[case] url: &str) {
        assert!(matches!(
            from_locator(url),
            Err(ExtractError::InvalidCoordinateFormat(_))
        ));
    }

    #[rstest]
    #[case("https://x.test/nocommas.jpg")]
    #[case("https://x.test/p,abc,def.jpg")]
    fn test_from_locator_lossy_falls_back_to_origin(#[case] url: &str) {
        assert_eq!(Coordinate::ORIGIN, from_locator_lossy(url));
    }
}
