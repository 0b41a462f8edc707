use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_t, App, AppSettings, Arg,
    ArgMatches, SubCommand,
};
use gmext::{
    distance::estimate_distance,
    error::Error,
    extension::{greedy_extension, ExactSearch, Extension},
    generator::GraphKind,
    graph::{load_graph, load_pair, save_graph, save_graphs, Graph},
    isomorphism::find_embedding,
    report::{DistanceReport, MatchReport},
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

fn load_input(matches: &ArgMatches) -> gmext::error::Result<(Graph, Graph)> {
    let files: Vec<&str> = matches.values_of("INPUT").into_iter().flatten().collect();
    match files.as_slice() {
        [pair] => load_pair(pair),
        [pattern, host] => Ok((load_graph(pattern)?, load_graph(host)?)),
        _ => Err(Error::InvalidArgument(String::from(
            "expected a pair file or two graph files",
        ))),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> gmext::error::Result<&'a str> {
    matches
        .value_of(name)
        .ok_or_else(|| Error::InvalidArgument(format!("missing {}", name)))
}

fn print_exact(
    pattern: &Graph,
    host: &Graph,
    max_budget: Option<usize>,
) -> gmext::error::Result<Option<Extension>> {
    let mut search = ExactSearch::new(pattern, host);
    if let Some(max_budget) = max_budget {
        search = search.max_budget(max_budget);
    }
    let extension = search.run()?;
    match &extension {
        Some(extension) => print!("Exact minimal extension:\n{}", extension),
        None => println!("No extension within budget {}.", search.ceiling()),
    }
    Ok(extension)
}

fn handle_match(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let (pattern, host) = load_input(matches)?;
    let report = MatchReport::new(find_embedding(&pattern, &host))
        .show_embedding(matches.is_present("embedding"));
    print!("{}", report);
    if !report.is_match() {
        if matches.is_present("exact") {
            print_exact(&pattern, &host, None)?;
        } else {
            print!("Greedy extension:\n{}", greedy_extension(&pattern, &host));
        }
    }
    Ok(())
}

fn handle_extend(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let (pattern, host) = load_input(matches)?;
    let max_budget = if matches.is_present("max-budget") {
        Some(value_t!(matches, "max-budget", usize)?)
    } else {
        None
    };
    let strategy = required(matches, "strategy")?;
    let greedy = if strategy == "exact" {
        None
    } else {
        let extension = greedy_extension(&pattern, &host);
        print!("Greedy extension:\n{}", extension);
        Some(extension)
    };
    if strategy != "greedy" {
        let exact = print_exact(&pattern, &host, max_budget)?;
        if let (Some(greedy), Some(exact)) = (greedy, exact) {
            println!(
                "Greedy cost {} vs. minimal cost {} (+{})",
                greedy.cost(),
                exact.cost(),
                greedy.cost().saturating_sub(exact.cost())
            );
        }
    }
    Ok(())
}

fn parse_kind(values: &[&str]) -> gmext::error::Result<(GraphKind, usize)> {
    let parse = |s: &str| {
        s.parse::<usize>()
            .map_err(|e| Error::InvalidArgument(format!("{}: {}", s, e)))
    };
    match values {
        [kind, n] => Ok((GraphKind::new(kind, None)?, parse(n)?)),
        [kind, n, k] => Ok((GraphKind::new(kind, Some(parse(k)?))?, parse(n)?)),
        _ => Err(Error::InvalidArgument(String::from("expected TYPE N [K]"))),
    }
}

fn handle_generate(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut args: Vec<&str> = matches.values_of("ARGS").into_iter().flatten().collect();
    let output = args
        .pop()
        .ok_or_else(|| Error::InvalidArgument(String::from("missing OUTPUT")))?;
    let (kind, n) = parse_kind(&args)?;
    let mut rng = if matches.is_present("seed") {
        StdRng::seed_from_u64(value_t!(matches, "seed", u64)?)
    } else {
        StdRng::from_entropy()
    };
    let graph = kind.generate(n, &mut rng)?;
    if let Some(pair) = matches.values_of("pair") {
        let (kind, n) = parse_kind(&pair.collect::<Vec<_>>())?;
        let host = kind.generate(n, &mut rng)?;
        save_graphs(output, &[&graph, &host])?;
    } else {
        save_graph(output, &graph)?;
    }
    info!("written to {}", output);
    Ok(())
}

fn handle_distance(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let (pattern, host) = load_pair(required(matches, "PAIRFILE")?)?;
    print!("{}", DistanceReport(&estimate_distance(&pattern, &host)));
    Ok(())
}

fn summarize(path: &str) -> String {
    match load_pair(path) {
        Ok((pattern, host)) => match find_embedding(&pattern, &host) {
            Some(_) => format!("{}: embeds", path),
            None => format!(
                "{}: greedy extension cost {}",
                path,
                greedy_extension(&pattern, &host).cost()
            ),
        },
        Err(e) => format!("{}: {}", path, e),
    }
}

fn handle_batch(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let files: Vec<&str> = matches.values_of("PAIRFILE").into_iter().flatten().collect();
    let lines: Vec<String> = files.par_iter().map(|path| summarize(path)).collect();
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn input_arg() -> Arg<'static, 'static> {
    Arg::with_name("INPUT")
        .help("A pair file, or the files of G and H")
        .required(true)
        .min_values(1)
        .max_values(2)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .help("Raises the log level; may be repeated")
                .short("v")
                .multiple(true),
        )
        .after_help(
            r"A graph file holds the vertex count n followed by the n rows of the 0/1
adjacency matrix. A pair file holds G followed by H. Lines starting with #
are comments.
",
        )
        .subcommand(
            SubCommand::with_name("match")
                .about("Decides whether G is isomorphic to a subgraph of H")
                .arg(input_arg())
                .arg(
                    Arg::with_name("embedding")
                        .help("Prints the vertex mapping")
                        .long("embedding")
                        .takes_value(false),
                )
                .arg(
                    Arg::with_name("exact")
                        .help("Uses the exact search when G does not embed")
                        .long("exact")
                        .takes_value(false),
                ),
        )
        .subcommand(
            SubCommand::with_name("extend")
                .about("Computes the vertices and edges to add to H so that G embeds")
                .arg(input_arg())
                .arg(
                    Arg::with_name("strategy")
                        .long("strategy")
                        .takes_value(true)
                        .possible_values(&["exact", "greedy", "both"])
                        .default_value("greedy"),
                )
                .arg(
                    Arg::with_name("max-budget")
                        .help("Gives up the exact search beyond this cost")
                        .long("max-budget")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("generate")
                .about("Generates a graph file")
                .after_help(
                    "TYPE is one of path, cycle, complete or random; K is the edge count of a \
                     random graph. Put --pair after OUTPUT.",
                )
                .arg(
                    Arg::with_name("ARGS")
                        .help("TYPE N [K] OUTPUT")
                        .required(true)
                        .min_values(3)
                        .max_values(4),
                )
                .arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("pair")
                        .help("Also generates H from TYPE2 N2 [K2] and writes a pair file")
                        .long("pair")
                        .takes_value(true)
                        .min_values(2)
                        .max_values(3),
                ),
        )
        .subcommand(
            SubCommand::with_name("distance")
                .about("Estimates the edit distance between G and H")
                .arg(Arg::with_name("PAIRFILE").required(true)),
        )
        .subcommand(
            SubCommand::with_name("batch")
                .about("Matches many pair files in parallel")
                .arg(Arg::with_name("PAIRFILE").required(true).multiple(true)),
        )
        .get_matches();
    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    match matches.subcommand() {
        ("match", Some(matches)) => handle_match(matches),
        ("extend", Some(matches)) => handle_extend(matches),
        ("generate", Some(matches)) => handle_generate(matches),
        ("distance", Some(matches)) => handle_distance(matches),
        ("batch", Some(matches)) => handle_batch(matches),
        _ => Ok(()),
    }
}
