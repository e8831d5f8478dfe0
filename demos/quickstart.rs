use std::io::Cursor;

use planform::config::presets;
use planform::io::{csv, polar_file};
use planform::polar::{self, derive_metrics, CruiseConditions};
use planform::sizing;

// A short tabulated polar in the usual export layout (11 header lines, then
// alpha cl cd cdp cm ...), inlined so the demo runs without data files.
const SAMPLE_POLAR: &str = "\
demo airfoil polar
line 2
line 3
line 4
line 5
line 6
line 7
line 8
line 9
line 10
line 11
 -2.0  0.05  0.0090  0.0070  -0.040  0.70  1.00  -0.40  0.0  0.30
  0.0  0.25  0.0085  0.0065  -0.045  0.65  1.00  -0.50  0.0  0.29
  2.0  0.45  0.0090  0.0068  -0.050  0.60  1.00  -0.65  0.0  0.28
  4.0  0.65  0.0105  0.0078  -0.052  0.52  1.00  -0.85  0.0  0.27
  6.0  0.84  0.0130  0.0095  -0.053  0.45  0.98  -1.10  0.0  0.27
  8.0  1.00  0.0170  0.0120  -0.051  0.38  0.95  -1.45  0.0  0.26
";

fn main() {
    let cfg = presets::light_utility();
    let sizing = sizing::size(&cfg).expect("preset configuration is valid");

    println!("Takeoff mass: {:.1} kg", sizing.budget.takeoff_mass);
    let cruise = sizing.cruise_point();
    println!(
        "Cruise wing: {:.2} m^2, span {:.2} m, chord {:.3} m",
        cruise.wing_area, cruise.span, cruise.chord
    );

    let table = polar_file::read_polar(Cursor::new(SAMPLE_POLAR), "Demo Airfoil")
        .expect("in-memory read cannot fail");
    let conditions = CruiseConditions::from_sizing(&sizing, &cfg);
    let report = polar::analyze(&table, &conditions);

    if let Some((alpha, ld)) = report.max_l_over_d {
        println!("Max L/D: {:.2} at alpha = {:.2} deg", ld, alpha);
    }
    if let Some(op) = report.operating_point {
        println!(
            "Operating point at CL {:.3}: alpha = {:.2} deg, L/D = {:.2}",
            conditions.section_cl_target, op.alpha, op.l_over_d
        );
    }
    if let Some(climb) = report.climb {
        println!("Best climb rate: {:.2} m/s", climb.climb_rate);
    }

    let derived = derive_metrics(&table);
    csv::write_sweep_file("sweep.csv", &sizing.points).expect("Failed to write CSV");
    csv::write_polar_metrics_file("demo_airfoil.csv", &table, &derived)
        .expect("Failed to write CSV");
    println!("Exported: sweep.csv, demo_airfoil.csv");
}
