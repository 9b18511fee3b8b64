//! Tab-separated record export

use std::io::{self, Write};

use crate::sample::MotionRecord;

/// Write decoded records as a text table.
///
/// One header line, then one tab-separated row per record: timestep,
/// acceleration x/y/z, angle x/y/z, angular velocity x/y/z. Axes of
/// invalid samples already hold NaN and render as the literal `NaN`.
pub fn write_records<W: Write>(out: &mut W, records: &[MotionRecord]) -> io::Result<()> {
    writeln!(
        out,
        "#t,xAcceleration,yAcceleration,zAcceleration,xAngle,yAngle,zAngle,\
         xAngleVelocity,yAngleVelocity,zAngleVelocity"
    )?;

    for record in records {
        let accel = record.acceleration;
        let angle = record.angle;
        let angular = record.angular_velocity;
        writeln!(
            out,
            "{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
            record.timestep,
            accel.x,
            accel.y,
            accel.z,
            angle.x,
            angle.y,
            angle.z,
            angular.x,
            angular.y,
            angular.z,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::AttributeSample;

    fn valid_sample(x: f64, y: f64, z: f64) -> AttributeSample {
        AttributeSample {
            x,
            y,
            z,
            temperature: 30.0,
            valid: true,
        }
    }

    #[test]
    fn test_header_and_row_layout() {
        let records = [MotionRecord {
            timestep: 0,
            acceleration: valid_sample(1.0, 2.0, 3.0),
            angular_velocity: valid_sample(7.0, 8.0, 9.0),
            angle: valid_sample(4.0, 5.0, 6.0),
        }];

        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "#t,xAcceleration,yAcceleration,zAcceleration,xAngle,yAngle,zAngle,xAngleVelocity,yAngleVelocity,zAngleVelocity"
        );
        // Angle columns precede angular velocity
        assert_eq!(
            lines.next().unwrap(),
            "0\t1.000000\t2.000000\t3.000000\t4.000000\t5.000000\t6.000000\t7.000000\t8.000000\t9.000000"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_invalid_sample_renders_nan() {
        let records = [MotionRecord {
            timestep: 3,
            acceleration: valid_sample(0.5, 0.5, 0.5),
            angular_velocity: AttributeSample::invalid(),
            angle: AttributeSample::invalid(),
        }];

        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();
        let text = String::from_utf8(out).unwrap();
        let row = text.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split('\t').collect();

        assert_eq!(fields[0], "3");
        assert_eq!(&fields[4..10], ["NaN", "NaN", "NaN", "NaN", "NaN", "NaN"]);
    }

    #[test]
    fn test_empty_records_writes_header_only() {
        let mut out = Vec::new();
        write_records(&mut out, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
