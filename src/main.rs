use planform::config::presets;
use planform::io::polar_file;
use planform::polar::{self, CruiseConditions};
use planform::sizing;

fn main() {
    let polar_paths: Vec<String> = std::env::args().skip(1).collect();

    // -----------------------------------------------------------------------
    // Sizing: mass budget + wing geometry sweep
    // -----------------------------------------------------------------------
    let cfg = presets::light_utility();
    let sizing = match sizing::size(&cfg) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let cruise = sizing.cruise_point();
    let slowest = sizing.slowest_point();

    println!();
    println!("====================================================================");
    println!("  PRELIMINARY SIZING — {:.0} kg payload class", cfg.payload_mass);
    println!("====================================================================");
    println!();
    println!("  Mass Budget");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Takeoff mass:  {:>8.1} kg    Payload:      {:>8.1} kg",
        sizing.budget.takeoff_mass, sizing.budget.payload_mass
    );
    println!(
        "  Empty mass:    {:>8.1} kg    Fuel:         {:>8.1} kg",
        sizing.budget.empty_mass, sizing.budget.fuel_mass
    );
    println!();

    println!("  Cruise Point ({:.1} m/s)", cruise.speed);
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Wing span:     {:>8.2} m     Wing area:    {:>8.2} m^2",
        cruise.span, cruise.wing_area
    );
    println!(
        "  Mean chord:    {:>8.2} m     Aspect ratio: {:>8.1}",
        cruise.chord, cfg.aspect_ratio
    );
    println!(
        "  Re (sweep floor, {:.1} m/s): {:.0}",
        slowest.speed, slowest.reynolds
    );
    println!(
        "  Target section CL: {:.3}  (cruise CL {:.2} / {:.2} / {:.2})",
        sizing.section_cl_target, cfg.cruise_cl, cfg.wing_efficiency, cfg.interference_efficiency
    );
    println!();

    // -----------------------------------------------------------------------
    // Sweep table (sampled)
    // -----------------------------------------------------------------------
    println!("  Geometry Sweep");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>9}  {:>10}  {:>8}  {:>9}  {:>11}",
        "V (m/s)", "S (m^2)", "b (m)", "c (m)", "Re"
    );
    println!("  {}", "─".repeat(56));

    let sample_interval = (sizing.points.len() / 20).max(1);
    for (i, p) in sizing.points.iter().enumerate() {
        if i % sample_interval != 0 && i != sizing.points.len() - 1 {
            continue;
        }
        println!(
            "  {:>9.1}  {:>10.2}  {:>8.2}  {:>9.3}  {:>11.0}",
            p.speed, p.wing_area, p.span, p.chord, p.reynolds
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // Airfoil comparison
    // -----------------------------------------------------------------------
    if polar_paths.is_empty() {
        println!("  (pass polar .txt files as arguments for the airfoil comparison)");
        println!();
        return;
    }

    let conditions = CruiseConditions::from_sizing(&sizing, &cfg);

    println!("====================================================================");
    println!("  AIRFOIL COMPARISON — target section CL {:.3}", conditions.section_cl_target);
    println!("====================================================================");

    for path in &polar_paths {
        let table = match polar_file::read_polar_file(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("  skipping {path}: {e}");
                continue;
            }
        };

        let report = polar::analyze(&table, &conditions);

        println!();
        println!("  {}  ({} rows)", report.name, table.rows.len());
        println!("  ──────────────────────────────────────────────────────────────────");
        if !table.cl_is_monotonic() {
            println!(
                "  note: CL non-monotonic past row {}; operating point uses the pre-stall range",
                table.pre_stall().len()
            );
        }

        match report.max_l_over_d {
            Some((alpha, ld)) => println!("  Max L/D:        {:>8.2}   at alpha = {:>6.2} deg", ld, alpha),
            None => println!("  Max L/D:             n/a   (no usable drag values)"),
        }
        match report.max_cl {
            Some((alpha, cl)) => println!("  Max CL:         {:>8.4}   at alpha = {:>6.2} deg", cl, alpha),
            None => println!("  Max CL:              n/a"),
        }
        match report.operating_point {
            // Targets outside the tabulated CL range clamp to the nearest row.
            Some(op) => println!(
                "  Operating pt:   alpha = {:>6.2} deg   L/D = {:>7.2}",
                op.alpha, op.l_over_d
            ),
            None => println!("  Operating pt:        n/a   (no monotonic CL range)"),
        }
        match report.climb {
            Some(c) => println!(
                "  Best climb:     {:>8.2} m/s  (CL^3/CD^2 = {:.1} at alpha = {:.2} deg)",
                c.climb_rate, c.endurance_max, c.alpha
            ),
            None => println!("  Best climb:          n/a   (no positive endurance parameter)"),
        }
    }

    println!();
    println!("====================================================================");
    println!();
}
