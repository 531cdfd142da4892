mod config;
mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use communicator_adapters::{
    present_board, present_board_row, present_catalog, present_draft, present_thumbnail,
    FsThumbnailGenerator, JsonBoardFile, WalkdirPictogramScanner,
};
use communicator_application::{
    AddOptionCommand, ApplicationService, ListBoardsCommand, LoadCatalogCommand,
    NewDocumentCommand, OpenBoardsCommand, RemoveBoardCommand, SaveBoardsCommand,
    ShowBoardCommand, StoreDraftCommand, ThumbnailCommand,
};
use config::AppConfig;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "communicator", about = "Build pictogram communication boards")]
struct Cli {
    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Default)]
struct ConfigOverrides {
    /// Directory scanned for pictograms.
    #[arg(long, global = true, env = "COMMUNICATOR_PICTOGRAMS")]
    pictograms: Option<PathBuf>,

    #[arg(long, global = true, env = "COMMUNICATOR_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// Number of pictogram slots on a board.
    #[arg(long, global = true, env = "COMMUNICATOR_SLOTS")]
    slots: Option<usize>,

    #[arg(long, global = true, env = "COMMUNICATOR_THUMBNAIL_SIZE")]
    thumbnail_size: Option<u32>,
}

impl ConfigOverrides {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(root) = self.pictograms {
            config.pictogram_root = root;
        }
        if let Some(dir) = self.cache_dir {
            config.cache_dir = dir;
        }
        if let Some(slots) = self.slots {
            config.slot_count = slots;
        }
        if let Some(size) = self.thumbnail_size {
            config.thumbnail_size = size;
        }
        config
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the pictogram tree.
    Catalog {
        /// Only list image files.
        #[arg(long)]
        images_only: bool,
    },
    /// List the boards saved in a file.
    List { file: PathBuf },
    /// Print one board.
    Show { file: PathBuf, name: String },
    /// Write an empty board file.
    New { file: PathBuf },
    /// Build a board from images (`path` or `path=title`) and save it,
    /// replacing any board with the same name.
    Store {
        file: PathBuf,
        name: String,
        #[arg(required = true)]
        images: Vec<String>,
    },
    /// Remove a board and save the file.
    Remove { file: PathBuf, name: String },
    /// Write a cached thumbnail for an image.
    Thumb { image: PathBuf },
}

#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Runtime(String),
}

fn main() -> ExitCode {
    logging::init_logging();
    let cli = Cli::parse();
    let config = cli.overrides.apply(AppConfig::default());

    match run_command(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service(config: &AppConfig, images_only: bool) -> ApplicationService {
    let scanner = if images_only {
        WalkdirPictogramScanner::images_only()
    } else {
        WalkdirPictogramScanner::default()
    };
    ApplicationService::new(
        Box::new(JsonBoardFile),
        Box::new(scanner),
        Box::new(FsThumbnailGenerator),
        config.slot_count,
    )
}

fn parse_image_arg(arg: &str) -> (String, Option<String>) {
    match arg.rsplit_once('=') {
        Some((path, title)) => (path.to_string(), Some(title.to_string())),
        None => (arg.to_string(), None),
    }
}

fn open_existing(service: &mut ApplicationService, file: &Path) -> Result<(), CommandError> {
    if !file.exists() {
        info!(path = %file.display(), "board file does not exist yet, starting empty");
        service.new_document(NewDocumentCommand);
        return Ok(());
    }
    service
        .open_boards(OpenBoardsCommand {
            path: file.to_path_buf(),
        })
        .map(|_| ())
        .map_err(|error| CommandError::Runtime(format!("open failed: {error}")))
}

fn save(service: &ApplicationService, file: &Path) -> Result<(), CommandError> {
    service
        .save_boards(SaveBoardsCommand {
            path: file.to_path_buf(),
        })
        .map_err(|error| CommandError::Runtime(format!("save failed: {error}")))
}

fn run_command(command: Command, config: &AppConfig) -> Result<(), CommandError> {
    config.validate().map_err(CommandError::Usage)?;

    let images_only = matches!(command, Command::Catalog { images_only: true });
    let mut service = build_application_service(config, images_only);

    let result = execute(command, config, &mut service);
    let events = service.poll_events();
    for event in &events {
        debug!(?event, "store event");
    }
    result
}

fn execute(
    command: Command,
    config: &AppConfig,
    service: &mut ApplicationService,
) -> Result<(), CommandError> {
    match command {
        Command::Catalog { .. } => {
            let catalog = service
                .load_catalog(LoadCatalogCommand {
                    root: config.pictogram_root.clone(),
                })
                .map_err(|error| CommandError::Runtime(format!("catalog failed: {error}")))?;
            println!("{}", present_catalog(catalog));
            Ok(())
        }
        Command::List { file } => {
            service
                .open_boards(OpenBoardsCommand { path: file })
                .map_err(|error| CommandError::Runtime(format!("list failed: {error}")))?;
            let boards = service.list_boards(ListBoardsCommand);
            if boards.is_empty() {
                println!("no boards in file");
                return Ok(());
            }
            for (index, board) in boards.iter().enumerate() {
                println!("{}", present_board_row(index, board));
            }
            Ok(())
        }
        Command::Show { file, name } => {
            service
                .open_boards(OpenBoardsCommand { path: file })
                .map_err(|error| CommandError::Runtime(format!("show failed: {error}")))?;
            let board = service
                .show_board(ShowBoardCommand { name })
                .map_err(|error| CommandError::Runtime(format!("show failed: {error}")))?;
            println!("{}", present_board(board));
            Ok(())
        }
        Command::New { file } => {
            service.new_document(NewDocumentCommand);
            save(service, &file)?;
            println!("created {}", file.display());
            Ok(())
        }
        Command::Store { file, name, images } => {
            open_existing(service, &file)?;
            service.store_mut().clean_draft();
            service.store_mut().set_draft_name(&name);
            for arg in &images {
                let (image_file_name, title) = parse_image_arg(arg);
                service
                    .add_option(AddOptionCommand {
                        image_file_name,
                        title,
                    })
                    .map_err(|error| CommandError::Usage(format!("cannot add {arg}: {error}")))?;
            }
            let outcome = service
                .store_draft(StoreDraftCommand)
                .map_err(|error| CommandError::Usage(format!("store failed: {error}")))?;
            save(service, &file)?;

            println!("{}", present_draft(service.store().draft()));
            let verb = if outcome.replaced() { "replaced" } else { "appended" };
            println!("{verb} board {name} at index {}", outcome.index());
            Ok(())
        }
        Command::Remove { file, name } => {
            open_existing(service, &file)?;
            if !service.remove_board(RemoveBoardCommand { name: name.clone() }) {
                println!("no board named {name}");
                return Ok(());
            }
            save(service, &file)?;
            println!("removed board {name}");
            Ok(())
        }
        Command::Thumb { image } => {
            let thumb = service
                .thumbnail(ThumbnailCommand {
                    source: image,
                    cache_root: config.cache_dir.clone(),
                    size: config.thumbnail_size,
                })
                .map_err(|error| CommandError::Runtime(format!("thumbnail failed: {error}")))?;
            println!("{}", present_thumbnail(&thumb));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_store_command_with_titles() {
        let cli = Cli::try_parse_from([
            "communicator",
            "store",
            "boards.json",
            "Animals",
            "/p/dog.png",
            "/p/cat.png=Kitty",
        ])
        .expect("store should parse");

        match cli.command {
            Command::Store { name, images, .. } => {
                assert_eq!(name, "Animals");
                assert_eq!(images.len(), 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn store_requires_at_least_one_image() {
        let result = Cli::try_parse_from(["communicator", "store", "boards.json", "Animals"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_overrides_replace_defaults() {
        let cli = Cli::try_parse_from([
            "communicator",
            "catalog",
            "--pictograms",
            "/srv/pictos",
            "--slots",
            "9",
        ])
        .expect("catalog should parse");

        let config = cli.overrides.apply(AppConfig::default());

        assert_eq!(config.pictogram_root, PathBuf::from("/srv/pictos"));
        assert_eq!(config.slot_count, 9);
        assert_eq!(config.cache_dir, PathBuf::from("cache"));
    }

    #[test]
    fn image_arg_splits_optional_title() {
        assert_eq!(
            parse_image_arg("/p/cat.png=Kitty"),
            ("/p/cat.png".to_string(), Some("Kitty".to_string()))
        );
        assert_eq!(
            parse_image_arg("/p/size=big/cat.png=Kitty"),
            ("/p/size=big/cat.png".to_string(), Some("Kitty".to_string()))
        );
        assert_eq!(parse_image_arg("/p/dog.png"), ("/p/dog.png".to_string(), None));
    }

    #[test]
    fn store_creates_then_replaces_board() {
        let dir = TempDir::new().expect("tempdir");
        let file = dir.path().join("boards.json");
        let config = AppConfig::default();

        run_command(
            Command::Store {
                file: file.clone(),
                name: "Animals".to_string(),
                images: vec!["/p/dog.png".to_string()],
            },
            &config,
        )
        .expect("first store");
        run_command(
            Command::Store {
                file: file.clone(),
                name: "Food".to_string(),
                images: vec!["/p/apple.png".to_string()],
            },
            &config,
        )
        .expect("second store");
        run_command(
            Command::Store {
                file: file.clone(),
                name: "Animals".to_string(),
                images: vec!["/p/cat.png=Kitty".to_string()],
            },
            &config,
        )
        .expect("replacement");

        let saved = std::fs::read_to_string(&file).expect("saved file");
        assert_eq!(
            saved,
            r#"[{"name":"Animals","options":[{"image_file_name":"/p/cat.png","title":"Kitty"}]},{"name":"Food","options":[{"image_file_name":"/p/apple.png","title":"APPLE"}]}]"#
        );
    }

    #[test]
    fn store_with_too_many_images_is_a_usage_error() {
        let dir = TempDir::new().expect("tempdir");
        let file = dir.path().join("boards.json");
        let config = AppConfig {
            slot_count: 1,
            ..AppConfig::default()
        };

        let result = run_command(
            Command::Store {
                file: file.clone(),
                name: "Big".to_string(),
                images: vec!["/p/a.png".to_string(), "/p/b.png".to_string()],
            },
            &config,
        );

        assert!(matches!(result, Err(CommandError::Usage(_))));
        assert!(!file.exists());
    }

    #[test]
    fn list_missing_file_is_a_runtime_error() {
        let dir = TempDir::new().expect("tempdir");
        let result = run_command(
            Command::List {
                file: dir.path().join("missing.json"),
            },
            &AppConfig::default(),
        );
        assert!(matches!(result, Err(CommandError::Runtime(_))));
    }

    #[test]
    fn zero_slot_config_is_rejected_before_running() {
        let dir = TempDir::new().expect("tempdir");
        let config = AppConfig {
            slot_count: 0,
            ..AppConfig::default()
        };
        let result = run_command(
            Command::New {
                file: dir.path().join("boards.json"),
            },
            &config,
        );
        assert!(matches!(result, Err(CommandError::Usage(_))));
    }
}
