use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    // Set default values
    let mut path = String::from("outline.txt");
    let mut entry_count = 200;
    let mut max_depth = 5;

    // Parse arguments if provided
    if args.len() > 1 {
        path = args[1].clone();
    }
    if args.len() > 2 {
        if let Ok(count) = args[2].parse::<usize>() {
            entry_count = count;
        }
    }
    if args.len() > 3 {
        if let Ok(depth) = args[3].parse::<usize>() {
            max_depth = depth.max(1);
        }
    }

    // Display information
    println!("Generating a random outline for viewer testing:");
    println!("  File: {}", path);
    println!("  Entries: {}", entry_count);
    println!("  Max depth: {}", max_depth);

    // Use a seeded RNG for reproducibility
    let mut rng = StdRng::seed_from_u64(42);

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "root")?;
    let mut depth = 1usize;
    for index in 0..entry_count {
        // drift the depth one step at a time; a line may sit at most one
        // level below its predecessor or the outline will not parse
        if index > 0 {
            depth = match rng.gen_range(0..4) {
                0 if depth > 1 => depth - 1,
                1 | 2 if depth < max_depth => depth + 1,
                _ => depth,
            };
        }

        let length = rng.gen_range(4..12);
        let label: String = (0..length).map(|_| rng.sample(Alphanumeric) as char).collect();
        writeln!(writer, "{}{}", "  ".repeat(depth), label)?;
    }
    writer.flush()?;

    println!("Done! Outline written with {} entries.", entry_count + 1);
    Ok(())
}
