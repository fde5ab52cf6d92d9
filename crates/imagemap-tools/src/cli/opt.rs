use clap::{ArgAction, Args, Parser, Subcommand};
use imagemap_utils::args::assets::AssetArgs;
use imagemap_utils::args::db::DbArgs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "imagemap", about = "Manage image map questions")]
pub(crate) struct Cli {
    #[arg(long, global = true, help = "Log json lines instead of plain text")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Create the database tables
    Init(Init),
    /// Store a question read from a json file
    Create(Create),
    /// Print a question as json or as html image map
    Show(Show),
    /// Upload the background image of a question
    Image(Image),
    /// Read the areas of a question from an html image map
    ImportMap(ImportMap),
    /// Export a question as qti item
    Export(Export),
    /// Duplicate a question within its pool
    Duplicate(Duplicate),
    /// Copy a question into another pool
    Copy(CopyObject),
    /// Write a test question back onto the pool question it was created from
    Sync(SyncOriginal),
    /// Print the points a learner reached
    Score(Score),
    /// Store the area a learner selected
    Submit(Submit),
    /// Write the json schema of the config file
    Schema(Schema),
}

#[derive(Debug, Parser)]
pub(crate) struct Init {
    #[command(flatten)]
    pub(crate) db: DbArgs,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct Service {
    #[command(flatten)]
    pub(crate) db: DbArgs,

    #[command(flatten)]
    pub(crate) assets: AssetArgs,

    #[arg(long, help = "Path to the imagemap config file")]
    pub(crate) config: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub(crate) struct Create {
    #[command(flatten)]
    pub(crate) service: Service,

    #[arg(required = true)]
    pub(crate) file: PathBuf,

    #[arg(long, help = "Id of a pool question the new question descends from")]
    pub(crate) original_id: Option<i32>,
}

#[derive(Debug, Parser)]
pub(crate) struct Show {
    #[command(flatten)]
    pub(crate) service: Service,

    pub(crate) question_id: i32,

    #[arg(long, help = "Print an html image map linking every area to this href")]
    pub(crate) html: Option<String>,
}

#[derive(Debug, Parser)]
pub(crate) struct Image {
    #[command(flatten)]
    pub(crate) service: Service,

    pub(crate) question_id: i32,

    #[arg(required = true)]
    pub(crate) file: PathBuf,
}

#[derive(Debug, Parser)]
pub(crate) struct ImportMap {
    #[command(flatten)]
    pub(crate) service: Service,

    pub(crate) question_id: i32,

    #[arg(required = true)]
    pub(crate) file: PathBuf,
}

#[derive(Debug, Parser)]
pub(crate) struct Export {
    #[command(flatten)]
    pub(crate) service: Service,

    pub(crate) question_id: i32,

    #[arg(short, long, help = "Write the item to this file instead of stdout")]
    pub(crate) output: Option<PathBuf>,

    #[arg(
        long,
        default_missing_value("true"),
        default_value("true"),
        num_args(0..=1),
        require_equals(true),
        action = ArgAction::Set
    )]
    pub(crate) header: bool,

    #[arg(
        long,
        default_missing_value("true"),
        default_value("true"),
        num_args(0..=1),
        require_equals(true),
        action = ArgAction::Set
    )]
    pub(crate) image: bool,

    #[arg(long, help = "Reference the image by its url instead of embedding it")]
    pub(crate) image_reference: bool,
}

#[derive(Debug, Parser)]
pub(crate) struct Duplicate {
    #[command(flatten)]
    pub(crate) service: Service,

    pub(crate) question_id: i32,

    #[arg(long, help = "The duplicate is used in a test and keeps the pool question lineage")]
    pub(crate) for_test: bool,

    #[arg(long)]
    pub(crate) title: Option<String>,

    #[arg(long)]
    pub(crate) author: Option<String>,

    #[arg(long)]
    pub(crate) owner: Option<i32>,
}

#[derive(Debug, Parser)]
pub(crate) struct CopyObject {
    #[command(flatten)]
    pub(crate) service: Service,

    pub(crate) question_id: i32,

    #[arg(long, required = true)]
    pub(crate) pool: i32,

    #[arg(long)]
    pub(crate) title: Option<String>,
}

#[derive(Debug, Parser)]
pub(crate) struct SyncOriginal {
    #[command(flatten)]
    pub(crate) service: Service,

    pub(crate) question_id: i32,
}

#[derive(Debug, Parser)]
pub(crate) struct Score {
    #[command(flatten)]
    pub(crate) service: Service,

    pub(crate) question_id: i32,

    #[arg(long, required = true)]
    pub(crate) active_id: i32,

    #[arg(long, help = "Pass to score, defaults to the last pass with an answer")]
    pub(crate) pass: Option<i32>,
}

#[derive(Debug, Parser)]
pub(crate) struct Submit {
    #[command(flatten)]
    pub(crate) service: Service,

    pub(crate) question_id: i32,

    #[arg(long, required = true)]
    pub(crate) active_id: i32,

    #[arg(long, help = "Pass to answer in, defaults to the current pass of the test run")]
    pub(crate) pass: Option<i32>,

    #[arg(long, help = "Index of the selected area, leave out to store an empty answer")]
    pub(crate) area: Option<usize>,
}

#[derive(Debug, Parser)]
pub(crate) struct Schema {
    #[arg(required = true)]
    pub(crate) output_folder: String,
}
