//! coordvec demo
//!
//! Integrates a body orbiting a central mass in the plane,
//! reporting its motion in polar coordinates
//! and splitting its velocity into radial and tangential parts.

use coordvec::prelude::*;
use coordvec::{try_project, Error};
use log::{debug, info, warn};

type Vec2 = Vector<f64, 2>;
type Vec3 = Vector<f64, 3>;
type Polar2 = Vector<f64, 2, Polar>;
type Spherical3 = Vector<f64, 3, Spherical>;

/// Gravitational parameter of the central mass
const GM: f64 = 1.;
const DT: f64 = 0.001;
const STEPS: usize = 8000;
const REPORT_EVERY: usize = 1000;

fn gravity(position: &Vec2) -> Vec2 {
    let r = position.magnitude().value();
    (position * (-GM / (r * r * r))).eval()
}

fn angular_momentum(position: &Vec2, velocity: &Vec2) -> f64 {
    position.x() * velocity.y() - position.y() * velocity.x()
}

fn orbit() -> Result<(), Error> {
    let mut position = Vec2::new([1., 0.]);
    let mut velocity = Vec2::new([0., 1.2]);
    let initial_momentum = angular_momentum(&position, &velocity);

    for step in 1..=STEPS {
        // Semi-implicit Euler
        velocity += gravity(&position) * DT;
        position += &velocity * DT;

        if step % REPORT_EVERY == 0 {
            let polar: Polar2 = position.convert();
            let (radial, tangential) = try_project(&position, &velocity)?;
            let outward = radial.dot(&position).value() >= 0.;
            info!(
                "t = {:.1}: r = {:.4}, phi = {:.4} rad, radial speed = {}{:.4}, tangential speed = {:.4}",
                step as f64 * DT,
                polar.rho(),
                polar.phi(),
                if outward { "+" } else { "-" },
                radial.magnitude().value(),
                tangential.magnitude().value(),
            );
        }
    }

    let drift = angular_momentum(&position, &velocity) - initial_momentum;
    info!("angular momentum drift after {} steps: {:e}", STEPS, drift);
    Ok(())
}

fn directions() {
    let v = Vec3::new([1., 1., 1.]);
    let s: Spherical3 = v.into();
    info!(
        "{} points at inclination {:.4} rad, azimuth {:.4} rad, {:.4} from the origin",
        v,
        s.inclination(),
        s.azimuth(),
        s.rho()
    );

    // A negative radius points the other way
    let flipped = Spherical3::new([-2., s.phi(), s.theta()]);
    let unit: Spherical3 = flipped.normalized().eval();
    let cartesian: Vec3 = unit.convert();
    info!("{:?} normalizes to {:?}, pointing along {}", flipped, unit, cartesian);

    // Scaling a polar vector leaves its angle alone
    let p = Polar2::new([1., 3. * core::f64::consts::FRAC_PI_4]);
    let scaled: Polar2 = (-3.0_f64 * &p).eval();
    debug!("{:?} * -3 = {:?}", p, scaled);
}

fn main() -> Result<(), Error> {
    {
        let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                "debug".to_owned()
            } else {
                "info".to_owned()
            }
        });
        std::env::set_var("RUST_LOG", rust_log);
    }

    env_logger::init(); // Log to stderr

    orbit()?;
    directions();

    // Projecting onto nothing is rejected
    if let Err(err) = try_project(&Vec2::default(), &Vec2::new([1., 0.])) {
        warn!("{}", err);
    }

    Ok(())
}
