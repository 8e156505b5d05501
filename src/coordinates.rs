use std::fmt::Formatter;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

lazy_static! {
    // e.g. "-33.919578, 18.432544"
    static ref DECIMAL_PATTERN: Regex = Regex::new(
        r"^(-?\d+\.?\d*),\s*(-?\d+\.?\d*)"
    ).expect("Could not create decimal coordinates regex");

    // e.g. 33°55'10.5"S, 18°25'57.2"E
    static ref DMS_PATTERN: Regex = Regex::new(
        r#"^(\d+)°(\d+)'(\d+\.?\d*)"?([NS]),\s*(\d+)°(\d+)'(\d+\.?\d*)"?([EW])"#
    ).expect("Could not create DMS coordinates regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Result<Coordinate, CoordinateError> {
        let in_range = (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !in_range {
            return Err(CoordinateError::OutOfRange { lat, lng });
        }
        Ok(Coordinate { lat, lng })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// Neither the decimal nor the DMS pattern matched
    Unparsable,
    /// Parsed fine but does not describe a point on the globe
    OutOfRange { lat: f64, lng: f64 }
}

impl std::fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            CoordinateError::Unparsable => write!(
                f,
                "Invalid coordinate format. Please use decimal \
                (e.g., -33.919578, 18.432544) or DMS format."
            ),
            CoordinateError::OutOfRange { .. } => write!(
                f,
                "Coordinates out of range. Latitude must be between -90 and 90, \
                longitude between -180 and 180."
            ),
        }
    }
}

impl std::error::Error for CoordinateError {}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Hemisphere {
    North,
    South,
    East,
    West
}

impl Hemisphere {
    fn from_letter(letter: &str) -> Option<Hemisphere> {
        match letter {
            "N" => Some(Hemisphere::North),
            "S" => Some(Hemisphere::South),
            "E" => Some(Hemisphere::East),
            "W" => Some(Hemisphere::West),
            _ => None,
        }
    }

    fn sign(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }
}

/// Parses a location typed by a user into a coordinate.
///
/// The decimal form (`-33.919578, 18.432544`) is tried first, then the
/// degrees-minutes-seconds form (`33°55'10.5"S, 18°25'57.2"E`). Both patterns
/// are anchored at the start of the (trimmed) input; trailing text is ignored.
pub fn parse_coordinates(text: &str) -> Result<Coordinate, CoordinateError> {
    let text = text.trim();

    if let Some((lat, lng)) = parse_decimal(text) {
        return Coordinate::new(lat, lng);
    }
    if let Some((lat, lng)) = parse_dms(text) {
        return Coordinate::new(lat, lng);
    }

    Err(CoordinateError::Unparsable)
}

fn parse_decimal(text: &str) -> Option<(f64, f64)> {
    let captures = DECIMAL_PATTERN.captures(text)?;
    let lat = captures[1].parse::<f64>().ok()?;
    let lng = captures[2].parse::<f64>().ok()?;
    Some((lat, lng))
}

fn parse_dms(text: &str) -> Option<(f64, f64)> {
    let captures = DMS_PATTERN.captures(text)?;
    let lat = dms_component(&captures, 1)?;
    let lng = dms_component(&captures, 5)?;
    Some((lat, lng))
}

/// Converts the four capture groups starting at `first` into signed degrees.
fn dms_component(captures: &Captures, first: usize) -> Option<f64> {
    let degrees = captures[first].parse::<u32>().ok()?;
    let minutes = captures[first + 1].parse::<u32>().ok()?;
    let seconds = captures[first + 2].parse::<f64>().ok()?;
    let hemisphere = Hemisphere::from_letter(&captures[first + 3])?;

    let magnitude = degrees as f64 + minutes as f64 / 60.0 + seconds / 3600.0;
    Some(hemisphere.sign() * magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_parse_decimal() {
        let coordinate = parse_coordinates("-33.919578, 18.432544").unwrap();
        assert_eq!(coordinate.lat, -33.919578);
        assert_eq!(coordinate.lng, 18.432544);

        let coordinate = parse_coordinates("  51.5,-0.12 ").unwrap();
        assert_eq!(coordinate.lat, 51.5);
        assert_eq!(coordinate.lng, -0.12);
    }

    #[test]
    fn test_parse_decimal_integers() {
        let coordinate = parse_coordinates("12, -7").unwrap();
        assert_eq!(coordinate, Coordinate { lat: 12.0, lng: -7.0 });
    }

    #[test]
    fn test_decimal_display_reparses() {
        let samples = [
            (-33.919578, 18.432544),
            (0.0, 0.0),
            (89.999999, -179.5),
            (-0.0001, 0.123456789),
        ];
        for (lat, lng) in samples.iter() {
            let original = Coordinate::new(*lat, *lng).unwrap();
            let parsed = parse_coordinates(&original.to_string()).unwrap();
            assert_eq!(parsed, original);
        }
    }

    #[test]
    fn test_parse_dms_south_east() {
        let coordinate = parse_coordinates(r#"33°55'10.5"S, 18°25'57.2"E"#).unwrap();
        assert_close(coordinate.lat, -(33.0 + 55.0 / 60.0 + 10.5 / 3600.0));
        assert_close(coordinate.lng, 18.0 + 25.0 / 60.0 + 57.2 / 3600.0);
    }

    #[test]
    fn test_parse_dms_north_west() {
        let coordinate = parse_coordinates(r#"40°42'46"N, 74°0'21.5"W"#).unwrap();
        assert_close(coordinate.lat, 40.0 + 42.0 / 60.0 + 46.0 / 3600.0);
        assert_close(coordinate.lng, -(74.0 + 21.5 / 3600.0));
    }

    #[test]
    fn test_parse_dms_without_closing_quote() {
        let coordinate = parse_coordinates("1°30'0N,2°15'0E").unwrap();
        assert_close(coordinate.lat, 1.5);
        assert_close(coordinate.lng, 2.25);
    }

    #[test]
    fn test_hemisphere_only_flips_sign() {
        let north = parse_coordinates(r#"10°10'10"N, 20°20'20"E"#).unwrap();
        let south = parse_coordinates(r#"10°10'10"S, 20°20'20"W"#).unwrap();
        assert_close(north.lat, -south.lat);
        assert_close(north.lng, -south.lng);
        assert!(north.lat > 0.0 && north.lng > 0.0);
    }

    #[test]
    fn test_dms_hemisphere_order_is_enforced() {
        let result = parse_coordinates(r#"18°25'57.2"E, 33°55'10.5"S"#);
        assert_eq!(result, Err(CoordinateError::Unparsable));
    }

    #[test]
    fn test_unparsable_input() {
        for input in ["not a coordinate", "", "   ", "-33.9", "abc, 18.4", "N33, E18"].iter() {
            assert_eq!(
                parse_coordinates(input),
                Err(CoordinateError::Unparsable),
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_out_of_range_input() {
        assert_eq!(
            parse_coordinates("91, 200"),
            Err(CoordinateError::OutOfRange { lat: 91.0, lng: 200.0 })
        );
        assert!(parse_coordinates("-33.9, 180.5").is_err());
        assert!(parse_coordinates(r#"95°0'0"S, 10°0'0"E"#).is_err());
        assert!(parse_coordinates("90, -180").is_ok());
    }
}
