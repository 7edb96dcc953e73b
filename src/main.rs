use clap::Parser;
use vitalis::cli::{
    ask, chat, dataset, handle_completions, handle_config_init, serve, Cli, Commands,
    ConfigCommands, DatasetCommands,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn print_output(result: CliResult<String>) -> CliResult<()> {
    result.map(|output| println!("{}", output))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ask(args) => print_output(ask::handle_ask(&args).await),
        Commands::Chat(args) => chat::handle_chat(&args).await,
        Commands::Serve(args) => serve::run_serve(args).await,
        Commands::Dataset(cmd) => match cmd {
            DatasetCommands::Describe(args) => print_output(dataset::handle_describe(&args)),
            DatasetCommands::Countries(args) => print_output(dataset::handle_countries(&args)),
            DatasetCommands::Country(args) => print_output(dataset::handle_country(&args)),
        },
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => print_output(handle_config_init(&args)),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
