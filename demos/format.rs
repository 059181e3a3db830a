use clap::{Parser, ValueEnum};
use quoted_pretty_printer::expr_constructors::*;
use quoted_pretty_printer::{format_expr, Expr, PrintOptions, DEFAULT_MAX_WIDTH};
use std::process;

#[derive(Parser, Debug)]
#[command(about = "Pretty print a sample syntax tree at a given width")]
struct Args {
    /// Which sample tree to print
    #[arg(value_enum, default_value_t = Sample::Supervisor)]
    sample: Sample,

    /// Maximum line width
    #[arg(short, long, default_value_t = DEFAULT_MAX_WIDTH)]
    width: u16,

    /// Draw a ruler at the maximum width
    #[arg(short, long)]
    ruler: bool,

    /// Log what the formatter does
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Sample {
    Supervisor,
    Imports,
    Config,
}

fn supervisor() -> Expr {
    qualified_call(
        alias(&["Supervisor"]),
        "start_link",
        vec![
            seq(vec![
                pair(alias(&["MyApp", "Repo"]), seq(vec![])),
                pair(
                    alias(&["MyApp", "Endpoint"]),
                    keywords(vec![("port", int(4000)), ("host", string("localhost"))]),
                ),
            ]),
            keywords(vec![
                ("strategy", sym("one_for_one")),
                ("name", alias(&["MyApp", "Supervisor"])),
            ]),
        ],
    )
}

fn imports() -> Expr {
    call(
        "import",
        vec![
            alias(&["Ecto", "Query"]),
            keywords(vec![(
                "only",
                seq(vec![
                    fun_ref("from", 2),
                    fun_ref("where", 3),
                    fun_ref("select", 3),
                    fun_ref("order_by", 3),
                ]),
            )]),
        ],
    )
}

fn config() -> Expr {
    attr_set(
        "defaults",
        map(vec![
            (sym("timeout"), neg(int(1))),
            (sym("pattern"), sigil('r', "^/api/(v1|v2)", "i")),
            (
                sym("retry"),
                map(vec![(string("max"), int(3)), (string("backoff"), float(1.5))]),
            ),
            (sym("handler"), index(attr("handlers"), sym("default"))),
        ]),
    )
}

fn main() {
    let args = Args::parse();
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    }

    let options = match PrintOptions::new(args.width) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };
    let expr = match args.sample {
        Sample::Supervisor => supervisor(),
        Sample::Imports => imports(),
        Sample::Config => config(),
    };

    if args.ruler {
        println!("{}|", "-".repeat(args.width as usize));
    }
    match format_expr(&expr, &options) {
        Ok(text) => println!("{}", text),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
