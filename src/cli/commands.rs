use clap::{Parser, Subcommand};

use crate::domain::CategoryFilter;
use crate::errors::{GamePulseError, GamePulseResult};

#[derive(Parser)]
#[command(name = "gamepulse")]
#[command(about = "Sports news feed with live scores, fixtures and trending movies")]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one page of the aggregated news feed
    Feed {
        /// Category to show, or "all"
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Page through the feed interactively
    Browse,

    /// Show live matches and upcoming fixtures
    Scores,

    /// List this week's trending movies
    Movies {
        /// Show cast and crew for a movie id
        #[arg(long, value_name = "ID")]
        details: Option<u64>,

        /// Advance the featured slide; negative values go back
        #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
        rotate: i64,

        /// Toggle a movie id on My List (repeatable)
        #[arg(long = "list", value_name = "ID")]
        list: Vec<u64>,
    },

    /// List the tracked categories
    Categories,
}

/// One line of input in `browse` mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Category(CategoryFilter),
    Page(usize),
    Next,
    Prev,
    Help,
    Quit,
}

impl std::str::FromStr for BrowseCommand {
    type Err = GamePulseError;

    fn from_str(s: &str) -> GamePulseResult<Self> {
        let input = s.trim();
        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (input, ""),
        };

        match (word.to_ascii_lowercase().as_str(), rest) {
            ("q" | "quit" | "exit", "") => Ok(BrowseCommand::Quit),
            ("n" | "next", "") => Ok(BrowseCommand::Next),
            ("p" | "prev", "") => Ok(BrowseCommand::Prev),
            ("h" | "help" | "?", "") => Ok(BrowseCommand::Help),
            ("c" | "category", name) if !name.is_empty() => {
                name.parse().map(BrowseCommand::Category)
            }
            ("page" | "g", number) => number
                .parse()
                .map(BrowseCommand::Page)
                .map_err(|_| GamePulseError::InvalidInput(format!("'{}' is not a page number", number))),
            _ => Err(GamePulseError::InvalidInput(format!(
                "Unknown command '{}'. Type 'help' for options.",
                input
            ))),
        }
    }
}

pub const BROWSE_HELP: &str = "Commands: category <name|all>, page <n>, next, prev, help, quit";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn test_parse_navigation() {
        assert_eq!("next".parse::<BrowseCommand>().unwrap(), BrowseCommand::Next);
        assert_eq!(" p ".parse::<BrowseCommand>().unwrap(), BrowseCommand::Prev);
        assert_eq!("Q".parse::<BrowseCommand>().unwrap(), BrowseCommand::Quit);
    }

    #[test]
    fn test_parse_page() {
        assert_eq!("page 3".parse::<BrowseCommand>().unwrap(), BrowseCommand::Page(3));
        assert!("page three".parse::<BrowseCommand>().is_err());
        assert!("page".parse::<BrowseCommand>().is_err());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            "category cricket".parse::<BrowseCommand>().unwrap(),
            BrowseCommand::Category(CategoryFilter::Only(Category::new("Cricket")))
        );
        assert_eq!(
            "c all".parse::<BrowseCommand>().unwrap(),
            BrowseCommand::Category(CategoryFilter::All)
        );
        assert!("category".parse::<BrowseCommand>().is_err());
    }

    #[test]
    fn test_parse_unknown() {
        assert!("dance".parse::<BrowseCommand>().is_err());
        assert!("next please".parse::<BrowseCommand>().is_err());
    }

    #[test]
    fn test_cli_parses_feed_arguments() {
        let cli = Cli::try_parse_from(["gamepulse", "feed", "--category", "F1", "--page", "2"]).unwrap();

        match cli.command {
            Commands::Feed { category, page, json } => {
                assert_eq!(category, CategoryFilter::Only(Category::new("f1")));
                assert_eq!(page, 2);
                assert!(!json);
            }
            _ => panic!("expected feed command"),
        }
    }

    #[test]
    fn test_cli_feed_defaults_to_all() {
        let cli = Cli::try_parse_from(["gamepulse", "feed"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Feed { category: CategoryFilter::All, page: 1, json: false }
        ));
    }

    #[test]
    fn test_cli_parses_movie_options() {
        let cli = Cli::try_parse_from([
            "gamepulse", "movies", "--rotate", "-2", "--list", "7", "--list", "9",
        ])
        .unwrap();

        match cli.command {
            Commands::Movies { details, rotate, list } => {
                assert!(details.is_none());
                assert_eq!(rotate, -2);
                assert_eq!(list, vec![7, 9]);
            }
            _ => panic!("expected movies command"),
        }
    }
}
