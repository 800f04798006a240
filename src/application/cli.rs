#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CorruptDataPolicy;
use crate::domain::models::Section;
use crate::domain::models::StorageName;
use crate::domain::services::Persistence;

const HOTKEYS: &str = "HOTKEYS:
- F1..F6: Jump to Students, Attendance, Progress, Summary, Planner, Teacher AI.
- Ctrl+Right / Ctrl+Left: Cycle through sections.
- Ctrl+C: Quit.

STUDENTS:
- Tab: Move between name, age and level. Left/Right changes the level.
- Enter: Register the student.
- Up/Down: Select a student. Ctrl+X removes them, Ctrl+A opens the AI assistant.

ATTENDANCE AND PROGRESS:
- p / a: Mark the selected student present or absent for today.
- 1 / 2 / 3: Record mastered, in progress or needs reinforcement. 0 records nothing.

TEACHER AI:
- Enter: Send a message. Ctrl+L clears the conversation.
- Up/Down, PageUp/PageDown: Scroll.";

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

async fn print_data_summary() -> Result<()> {
    let persistence = Persistence::from_config()?;
    let roster = persistence.load_roster().await?;
    let chat = persistence.load_chat().await?;

    println!("{}", roster.summary());
    println!("Chat messages: {}", chat.len());
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_data() -> Command {
    return Command::new("data")
        .about("Inspect stored student data.")
        .arg_required_else_help(true)
        .subcommand(Command::new("dir").about("Print where student data is stored."))
        .subcommand(
            Command::new("summary")
                .about("Print the number of students, attendance and progress records."),
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for MathMentor")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running MathMentor with environment variable RUST_LOG=mathmentor")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

pub fn build() -> Command {
    let hotkeys_text = HOTKEYS
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.ends_with(':') {
                return Paint::new(line).underline().bold().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("mathmentor")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(hotkeys_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_data())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("MATHMENTOR_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::DataDir.to_string())
                .short('d')
                .long(ConfigKey::DataDir.to_string())
                .env("MATHMENTOR_DATA_DIR")
                .num_args(1)
                .help(format!("Directory holding the stored student roster and teacher chat. [default: {}]", Config::default(ConfigKey::DataDir)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Storage.to_string())
                .long(ConfigKey::Storage.to_string())
                .env("MATHMENTOR_STORAGE")
                .num_args(1)
                .help(format!("Where to keep data between runs. [default: {}]", Config::default(ConfigKey::Storage)))
                .value_parser(PossibleValuesParser::new(StorageName::VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::OnCorruptData.to_string())
                .long(ConfigKey::OnCorruptData.to_string())
                .env("MATHMENTOR_ON_CORRUPT_DATA")
                .num_args(1)
                .help(format!("What to do when stored data cannot be read. [default: {}]", Config::default(ConfigKey::OnCorruptData)))
                .value_parser(PossibleValuesParser::new(CorruptDataPolicy::VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Section.to_string())
                .short('s')
                .long(ConfigKey::Section.to_string())
                .env("MATHMENTOR_SECTION")
                .num_args(1)
                .help(format!("Section opened on start. [default: {}]", Config::default(ConfigKey::Section)))
                .value_parser(PossibleValuesParser::new(Section::VARIANTS)),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .short('u')
                .long(ConfigKey::Username.to_string())
                .env("MATHMENTOR_USERNAME")
                .num_args(1)
                .help("Your name, displayed on your messages in the teacher chat. Defaults to \"You\"."),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = dirs::cache_dir()
                        .unwrap_or_default()
                        .join("mathmentor/debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("data", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            match subcmd_matches.subcommand() {
                Some(("dir", _)) => {
                    let persistence = Persistence::from_config()?;
                    println!("{}", persistence.storage().location());
                }
                Some(("summary", _)) => {
                    print_data_summary().await?;
                }
                _ => {
                    subcommand_data().print_long_help()?;
                }
            }
            return Ok(false);
        }
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
