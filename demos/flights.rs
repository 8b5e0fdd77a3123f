use std::io;

use tracing_subscriber::EnvFilter;
use trek::{
    algo::{can_reach, longest_word, print_self_loopers, print_short_words, unreachable},
    domain::{Airport, AirportNetwork},
    storage::{adjacency_map, VertexGraph},
};

fn main() -> io::Result<()> {
    // Run with `RUST_LOG=trek=debug` to see the traversal summaries.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut network = AirportNetwork::new();

    let prague = network.add_airport(Airport::new("PRG", "Prague"));
    let vienna = network.add_airport(Airport::new("VIE", "Vienna"));
    let munich = network.add_airport(Airport::new("MUC", "Munich"));
    let rome = network.add_airport(Airport::new("FCO", "Rome"));
    let reykjavik = network.add_airport(Airport::new("KEF", "Reykjavik"));

    network.add_flight(&prague, &vienna);
    network.add_flight(&vienna, &munich);
    network.add_flight(&munich, &prague);
    network.add_flight(&munich, &rome);
    network.add_flight(&reykjavik, &munich);

    for (from, to) in [(prague, rome), (rome, prague), (reykjavik, rome)] {
        let reachable = can_reach(&network, Some(&from), Some(&to));
        let verb = if reachable { "can" } else { "cannot" };

        if let (Some(from), Some(to)) = (network.airport(&from), network.airport(&to)) {
            println!("{} {verb} reach {}", from.name(), to.name());
        }
    }
    // Prague can reach Rome
    // Rome cannot reach Prague
    // Reykjavik can reach Rome

    let mut stranded = unreachable(&network, &prague)
        .into_iter()
        .filter_map(|id| network.airport(&id))
        .map(|airport| airport.code())
        .collect::<Vec<_>>();
    stranded.sort_unstable();

    println!("not reachable from Prague: {}", stranded.join(", "));
    // not reachable from Prague: KEF

    let mut words = VertexGraph::new();

    let [cat, dog, elephant, ox] =
        ["cat", "dog", "elephant", "ox"].map(|word| words.add_vertex(word));
    words.extend_with_neighbors([
        (cat, dog),
        (dog, elephant),
        (cat, elephant),
        (elephant, ox),
        (ox, ox),
    ]);

    println!("short words from cat:");
    print_short_words(&words, Some(&cat), 4)?;
    // cat
    // dog
    // ox

    println!("longest word from cat: {}", longest_word(&words, Some(&cat)));
    // longest word from cat: elephant

    println!("self-loopers from dog:");
    print_self_loopers(&words, Some(&dog))?;
    // ox

    let map = adjacency_map([("a", vec!["b"]), ("b", vec![]), ("c", vec![])]);
    println!("unreachable from a: {:?}", unreachable(&map, &"a"));
    // unreachable from a: {"c"}

    Ok(())
}
