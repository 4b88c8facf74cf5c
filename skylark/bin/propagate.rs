use clap::Parser;
use skylark::prelude::*;
use std::path::PathBuf;

/// Propagates a two-body scenario and prints the recovered orbital elements
#[derive(Parser, Debug, Default, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Scenario file (.yaml) location; defaults to the lunar scenario
    #[arg(long, short)]
    pub scenario: Option<PathBuf>,

    /// Destination filepath for per-step trajectory CSV
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Whether to cross-check the initial velocity against the elements
    #[arg(long, short)]
    pub reconstruct: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::earth_moon(),
    };

    println!(
        "{}: m = {:0.4e} kg, dt = {} s, {} steps",
        scenario.name, scenario.primary.mass, scenario.timestep, scenario.steps
    );
    println!("  initial {}", PV::new(scenario.position, scenario.velocity));

    let mut t = Vec::new();
    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut vx = Vec::new();
    let mut vy = Vec::new();
    let mut r = Vec::new();

    let mut prop = scenario.propagator();
    prop.run_with(scenario.steps, |i, pv| {
        t.push(i as f64 * scenario.timestep);
        x.push(pv.pos.x);
        y.push(pv.pos.y);
        vx.push(pv.vel.x);
        vy.push(pv.vel.y);
        r.push(pv.radius());
    })?;

    if let Some(peri) = prop.periapsis() {
        println!("  periapsis ({:0.4e}, {:0.4e})", peri.x, peri.y);
    }
    if let Some(apo) = prop.apoapsis() {
        println!("  apoapsis  ({:0.4e}, {:0.4e})", apo.x, apo.y);
    }

    let elements = prop.elements()?;
    println!("  semi-major axis  {:0.6e} m", elements.semi_major_axis);
    println!("  eccentricity     {:0.6}", elements.eccentricity);
    println!("  arg of periapsis {:0.6} rad", elements.arg_periapsis);
    println!("  angular momentum {:0.6e} m^2/s", elements.angular_momentum);

    if args.reconstruct {
        let vel = elements.reconstruct_velocity(scenario.primary.mu(), scenario.position)?;
        println!(
            "  reconstructed velocity ({:0.3}, {:0.3}), actual ({:0.3}, {:0.3})",
            vel.x, vel.y, scenario.velocity.x, scenario.velocity.y
        );
    }

    if let Some(out) = &args.out {
        write_csv(
            out,
            &[
                ("t", &t),
                ("x", &x),
                ("y", &y),
                ("vx", &vx),
                ("vy", &vy),
                ("r", &r),
            ],
        )?;
        println!("  wrote {}", out.display());
    }

    Ok(())
}
