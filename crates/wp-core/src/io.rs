//! Waypoint import/export formats.
//!
//! - JSON: the host page hands over the initial path as
//!   `[{"x":..,"y":..,"theta":..,"curvature":..}, ...]`.
//! - CSV: `time,x,y,theta,curvature` with a header row. `time` is the
//!   waypoint's index on export and ignored on import.

use crate::model::Waypoint;
use std::io::{Read, Write};
use thiserror::Error;

pub const CSV_HEADER: [&str; 5] = ["time", "x", "y", "theta", "curvature"];

#[derive(Debug, Error)]
pub enum WaypointIoError {
    #[error("no waypoints to export")]
    NothingToExport,
    #[error("row {row}: {column} is not a number: {value:?}")]
    BadNumber {
        row: u64,
        column: &'static str,
        value: String,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("waypoint list is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse the host's initial waypoint list.
pub fn waypoints_from_json(json: &str) -> Result<Vec<Waypoint>, WaypointIoError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a path for the host page.
pub fn waypoints_to_json(waypoints: &[Waypoint]) -> Result<String, WaypointIoError> {
    Ok(serde_json::to_string(waypoints)?)
}

/// Read a waypoint CSV file.
///
/// Rows that do not have exactly five columns are skipped.
pub fn read_waypoints_csv<R: Read>(reader: R) -> Result<Vec<Waypoint>, WaypointIoError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut waypoints = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() != CSV_HEADER.len() {
            log::debug!(
                "skipping CSV row with {} columns at {:?}",
                record.len(),
                record.position()
            );
            continue;
        }
        let row = record.position().map_or(0, |p| p.line());
        let field = |i: usize| -> Result<f64, WaypointIoError> {
            let value = &record[i];
            value.parse::<f64>().map_err(|_| WaypointIoError::BadNumber {
                row,
                column: CSV_HEADER[i],
                value: value.to_string(),
            })
        };
        // Column 0 (time) is validated but otherwise unused.
        field(0)?;
        waypoints.push(Waypoint::new(field(1)?, field(2)?, field(3)?, field(4)?));
    }
    Ok(waypoints)
}

/// Write `waypoints` as CSV. An empty path is refused.
pub fn write_waypoints_csv<W: Write>(
    waypoints: &[Waypoint],
    writer: W,
) -> Result<(), WaypointIoError> {
    if waypoints.is_empty() {
        return Err(WaypointIoError::NothingToExport);
    }
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for (i, wp) in waypoints.iter().enumerate() {
        wtr.write_record([
            i.to_string(),
            wp.x.to_string(),
            wp.y.to_string(),
            wp.theta.to_string(),
            wp.curvature.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_waypoints_csv`] into a `String`.
pub fn waypoints_to_csv_string(waypoints: &[Waypoint]) -> Result<String, WaypointIoError> {
    let mut buf = Vec::new();
    write_waypoints_csv(waypoints, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn export_header_and_index_column() {
        let csv = waypoints_to_csv_string(&[
            Waypoint::new(1.5, 2.0, 0.0, 0.0),
            Waypoint::new(-3.25, 4.0, 1.5, 0.125),
        ])
        .unwrap();
        assert_eq!(
            csv,
            "time,x,y,theta,curvature\n0,1.5,2,0,0\n1,-3.25,4,1.5,0.125\n"
        );
    }

    #[test]
    fn export_empty_is_refused() {
        assert!(matches!(
            waypoints_to_csv_string(&[]),
            Err(WaypointIoError::NothingToExport)
        ));
    }

    #[test]
    fn import_skips_short_rows() {
        let input = "time,x,y,theta,curvature\n0,1,2,3,4\n1,5,6\n2, 7.5 ,8,9,10\n";
        let wps = read_waypoints_csv(input.as_bytes()).unwrap();
        assert_eq!(
            wps,
            vec![
                Waypoint::new(1.0, 2.0, 3.0, 4.0),
                Waypoint::new(7.5, 8.0, 9.0, 10.0),
            ]
        );
    }

    #[test]
    fn import_rejects_non_numeric_field() {
        let input = "time,x,y,theta,curvature\n0,1,north,3,4\n";
        match read_waypoints_csv(input.as_bytes()) {
            Err(WaypointIoError::BadNumber { column, value, .. }) => {
                assert_eq!(column, "y");
                assert_eq!(value, "north");
            }
            other => panic!("expected BadNumber, got {other:?}"),
        }
    }

    #[test]
    fn json_list_parses() {
        let wps = waypoints_from_json(
            r#"[{"x":1,"y":2,"theta":0.5,"curvature":0.1},{"x":3,"y":4,"theta":0,"curvature":0}]"#,
        )
        .unwrap();
        assert_eq!(wps.len(), 2);
        assert_eq!(wps[0], Waypoint::new(1.0, 2.0, 0.5, 0.1));
    }
}
