use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;

use waypath::heap_sort;

const NAMES: [&str; 20] = [
    "Brandee", "Nelida", "Jaqueline", "Candyce", "Wayne", "Anissa", "Randal", "Milton", "Manda",
    "Pasquale", "Alpha", "Destiny", "Romaine", "Waneta", "Claudio", "Arnulfo", "Yukiko", "Barbra",
    "Judie", "Larry",
];

#[derive(Parser, Debug)]
#[command(name = "heapsort")]
#[command(about = "Heap sort a random integer sequence and a list of names, printing each stage.", long_about = None)]
struct Cli {
    /// How many random integers to sort
    #[arg(short, long, default_value_t = 20)]
    count: usize,

    /// Integers are drawn from 0..max
    #[arg(short, long, default_value_t = 100)]
    max: u32,

    /// Seed for the generator. If omitted, seeds from entropy.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn show<T: Ord + Debug>(mut items: Vec<T>) {
    println!("Original: {:?}", items);
    heap_sort::build_max_heap(&mut items);
    debug_assert!(heap_sort::is_max_heap_by(&items, T::cmp));
    println!("Heap: {:?}", items);
    heap_sort::heap_sort(&mut items);
    println!("Sorted: {:?}", items);
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let max = cli.max.max(1);
    let numbers: Vec<u32> = (0..cli.count).map(|_| rng.gen_range(0..max)).collect();
    log::debug!("sorting {} integers below {}", numbers.len(), max);

    show(numbers);
    println!();
    show(NAMES.to_vec());
}
