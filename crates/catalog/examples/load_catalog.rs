use catalog::load_creators;
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/creators.json");

    println!("Loading creator feed from {}...\n", path.display());

    let start = Instant::now();
    let creators = load_creators(path).expect("Failed to load creator feed");
    let elapsed = start.elapsed();

    let content_types: HashSet<&str> = creators
        .iter()
        .flat_map(|c| c.content_types.iter().map(String::as_str))
        .collect();
    let attributes: HashSet<&str> = creators
        .iter()
        .flat_map(|c| c.attributes.iter().map(String::as_str))
        .collect();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Creators: {}", creators.len());
    println!("Distinct content types: {}", content_types.len());
    println!("Distinct attributes: {}", attributes.len());
}
