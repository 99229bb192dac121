use chrono::Duration;

use itinerary_filter::domain::{Itinerary, Timestamp};
use itinerary_filter::filter::{BuildError, FilterBuilder};
use itinerary_filter::report;
use itinerary_filter::source::{ItinerarySource, SampleItineraries};

fn print_section(title: &str, itineraries: &[Itinerary], json: bool) {
    println!("---- {title} ----");
    if json {
        println!(
            "{}",
            report::to_json(itineraries).expect("itineraries serialize to JSON")
        );
    } else {
        print!("{}", report::render(itineraries));
    }
    println!();
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let json = std::env::args().any(|arg| arg == "--json");

    let source = SampleItineraries::default();
    let itineraries = source.get_all();
    let now = Timestamp::now();

    let departed_already = FilterBuilder::new().departure().lt(now)?.build()?;
    let without_invalid = FilterBuilder::new().remove_invalid_itineraries().build()?;
    let long_ground_time = FilterBuilder::new().idle().gt(Duration::hours(2))?.build()?;

    println!("[current time: {now}] [samples anchored at: {}]", source.base());
    println!();
    print_section("All itineraries", &itineraries, json);
    print_section(
        "Departing before the current time",
        &departed_already.evaluate(&itineraries),
        json,
    );
    print_section(
        "Without legs arriving before they depart",
        &without_invalid.evaluate(&itineraries),
        json,
    );
    print_section(
        "Ground time over two hours",
        &long_ground_time.evaluate(&itineraries),
        json,
    );

    Ok(())
}
