use chrono::Utc;
use skyephem::{GregorianDateTime, JulianDay, Observer, SkyClock};

fn main() {
    let now = JulianDay::from_utc(Utc::now());
    let observer = Observer::new(-3.70, 40.42);
    let sky = skyephem::SkyState::compute(now, observer);

    println!("{now} ({})", GregorianDateTime::from_julian_day(now));
    println!("Sun:  {}  -> {:?}", sky.sun, sky.sun_direction.to_array());
    println!("Moon: {}  -> {:?}", sky.moon, sky.moon_direction.to_array());
    println!("Phase: {:.3}", sky.moon_phase);

    // One simulated day at the default scale, sampled every 5 s of real time.
    let mut clock = SkyClock::new(now);
    for _ in 0..10 {
        let jd = clock.advance(5.0);
        let state = clock.state(observer);
        println!("{jd}: sun {}, daytime {}", state.sun, state.is_daytime());
    }
}
