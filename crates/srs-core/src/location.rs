//! Decoding of compound `Location` cells such as `N05W023`

use crate::error::{Error, Result};
use crate::table::{parse_number, Column, SrsTable, Unit};

/// Output column names for the decoded coordinates
pub const LATITUDE_COLUMN: &str = "Latitude";
pub const LONGITUDE_COLUMN: &str = "Longitude";

/// Signed heliographic coordinates in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

fn latitude_sign(letter: char) -> Option<f64> {
    match letter {
        'N' => Some(1.0),
        'S' => Some(-1.0),
        _ => None,
    }
}

fn longitude_sign(letter: char) -> Option<f64> {
    match letter {
        'W' => Some(1.0),
        'E' => Some(-1.0),
        _ => None,
    }
}

/// Decode one location cell.
///
/// Layout: latitude hemisphere, two latitude digits, longitude
/// hemisphere, then the longitude magnitude.
pub fn decode_location(value: &str, row: usize) -> Result<Coordinate> {
    let malformed = || Error::InvalidCoordinate {
        row,
        value: value.to_string(),
    };
    let hemisphere = |letter: char| Error::InvalidHemisphere {
        row,
        value: value.to_string(),
        letter,
    };

    let lat_letter = value.chars().next().ok_or_else(malformed)?;
    let lat_sign = latitude_sign(lat_letter).ok_or_else(|| hemisphere(lat_letter))?;

    let lat_digits = value.get(1..3).ok_or_else(malformed)?;
    let lon_letter = value.get(3..).and_then(|s| s.chars().next()).ok_or_else(malformed)?;
    let lon_sign = longitude_sign(lon_letter).ok_or_else(|| hemisphere(lon_letter))?;
    let lon_digits = value.get(4..).ok_or_else(malformed)?;

    let lat = parse_number(lat_digits).ok_or_else(malformed)?;
    let lon = parse_number(lon_digits).ok_or_else(malformed)?;

    Ok(Coordinate {
        latitude: lat_sign * lat,
        longitude: lon_sign * lon,
    })
}

/// Replace `column` with `Latitude` and `Longitude` columns at the same position.
///
/// Masked location cells give masked coordinates. Returns `false` if the
/// table has no such column.
pub fn decode_location_column(table: &mut SrsTable, column: &str) -> Result<bool> {
    let Some(idx) = table.column_index(column) else {
        return Ok(false);
    };

    let source = &table.columns[idx];
    let len = source.len();
    let mut latitude = Vec::with_capacity(len);
    let mut longitude = Vec::with_capacity(len);
    let mut mask = Vec::with_capacity(len);

    for row in 0..len {
        match source.text_at(row) {
            Some(text) => {
                let coord = decode_location(&text, row)?;
                latitude.push(coord.latitude);
                longitude.push(coord.longitude);
                mask.push(false);
            }
            None => {
                latitude.push(f64::NAN);
                longitude.push(f64::NAN);
                mask.push(true);
            }
        }
    }

    let mut lat_col = Column::number(LATITUDE_COLUMN, latitude, mask.clone());
    lat_col.unit = Some(Unit::Degree);
    let mut lon_col = Column::number(LONGITUDE_COLUMN, longitude, mask);
    lon_col.unit = Some(Unit::Degree);

    table.columns.remove(idx);
    table.columns.insert(idx, lon_col);
    table.columns.insert(idx, lat_col);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::Metadata;
    use crate::table::Value;

    #[test]
    fn test_decode_north_west() {
        let coord = decode_location("N05W023", 0).unwrap();
        assert_eq!(coord.latitude, 5.0);
        assert_eq!(coord.longitude, 23.0);
    }

    #[test]
    fn test_decode_south_east() {
        let coord = decode_location("S10E005", 0).unwrap();
        assert_eq!(coord.latitude, -10.0);
        assert_eq!(coord.longitude, -5.0);
    }

    #[test]
    fn test_decode_two_digit_longitude() {
        let coord = decode_location("S15W73", 0).unwrap();
        assert_eq!(coord.latitude, -15.0);
        assert_eq!(coord.longitude, 73.0);
    }

    #[test]
    fn test_decode_bad_hemisphere() {
        let err = decode_location("X05W023", 3).unwrap_err();
        assert!(matches!(err, Error::InvalidHemisphere { row: 3, letter: 'X', .. }));

        let err = decode_location("N05Q023", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidHemisphere { letter: 'Q', .. }));
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(
            decode_location("N0", 0),
            Err(Error::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            decode_location("NabW023", 0),
            Err(Error::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            decode_location("", 0),
            Err(Error::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_decode_column_replaces_in_place() {
        let mut table = SrsTable::new(Metadata::default());
        table.columns.push(Column::text("ID", vec!["I".into(), "IA".into()]));
        let mut location = Column::text("Location", vec!["N05W023".into(), "-".into()]);
        location.mask[1] = true;
        table.columns.push(location);
        table.columns.push(Column::number("Lo", vec![45.0, 1.0], vec![false, false]));

        assert!(decode_location_column(&mut table, "Location").unwrap());
        assert_eq!(table.column_names(), vec!["ID", "Latitude", "Longitude", "Lo"]);
        assert_eq!(table.value(0, "Latitude"), Some(Value::Number(5.0)));
        assert_eq!(table.value(0, "Longitude"), Some(Value::Number(23.0)));
        assert_eq!(table.value(1, "Latitude"), Some(Value::Masked));
        assert_eq!(table.value(1, "Longitude"), Some(Value::Masked));
        assert_eq!(table.column("Latitude").unwrap().unit, Some(Unit::Degree));
    }

    #[test]
    fn test_decode_column_absent() {
        let mut table = SrsTable::new(Metadata::default());
        assert!(!decode_location_column(&mut table, "Location").unwrap());
    }
}
