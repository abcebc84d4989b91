use clap::Parser;

use predset::domain::{Domain, DEFAULT_BOUND};
use predset::ops::{diff, filter, intersect, union};
use predset::set::{from_elements, singleton, universe, Set};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Elements of the base set.
    #[arg(value_name = "INT", allow_negative_numbers = true, default_values_t = [1, 2, 3, 4, 5])]
    elements: Vec<i64>,

    /// Half-width of the scan window `[-bound, bound]`.
    #[clap(long, value_name = "INT", default_value_t = DEFAULT_BOUND)]
    bound: i64,

    /// Log level.
    #[clap(long, value_name = "LEVEL", default_value = "info")]
    log: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let domain = Domain::new(args.bound);
    println!("domain = {:?}", domain);

    let base = Set::from(from_elements(args.elements.iter().copied()));
    print!("base = ");
    domain.print_set(&base);

    let evens = Set::from_fn(|x| x % 2 == 0);
    let odds = !&evens;

    let with_zero = union(base.clone(), singleton(0));
    println!("base + 0 = {}", domain.display(&with_zero));
    println!("even = {}", domain.display(&intersect(base.clone(), evens.clone())));
    println!("odd = {}", domain.display(&filter(base.clone(), odds.clone())));
    println!("base - odd = {}", domain.display(&diff(base.clone(), odds)));
    println!("outside base, in [-5, 5] = {}", Domain::new(5).display(&diff(universe(), base.clone())));

    let doubled = domain.map(base.clone(), |x| x * 2);
    println!("doubled = {}", domain.display(&doubled));
    let squares = domain.map(base.clone(), |x| x * x);
    println!("squared = {}", domain.display(&squares));

    println!("all even? {}", domain.for_all(&base, evens.clone()));
    println!("some even? {}", domain.exists(&base, evens.clone()));
    println!("doubled all even? {}", domain.for_all(&doubled, evens));
    println!("members = {}", domain.count(&base));

    Ok(())
}
