use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;
use structopt::StructOpt;

const NAME: &str = "resolute";

const ABOUT: &str = "
resolute decides propositional entailment by resolution refutation.
The input file holds one clause per line, literals separated by spaces and
negated with '~'. The last line is the query. Every clause added to the
knowledge base is printed, followed by Valid or Fail.
";

pub enum Output {
    Transcript,
    Silent,
}

impl FromStr for Output {
    type Err = String;

    fn from_str(output: &str) -> Result<Self, Self::Err> {
        match output {
            "transcript" => Ok(Self::Transcript),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("{}: not a valid output", output)),
        }
    }
}

#[derive(StructOpt)]
#[structopt(name = NAME, about = ABOUT)]
pub struct Options {
    #[structopt(parse(from_os_str), help = "path to knowledge base file")]
    pub path: PathBuf,

    #[structopt(
        long,
        help = "clause output",
        possible_values = &["transcript", "silent"],
        default_value = "transcript"
    )]
    pub output: Output,

    #[structopt(long, help = "limit number of resolution attempts")]
    pub steps: Option<usize>,

    #[structopt(long, help = "print search statistics on exit")]
    pub statistics: bool,

    #[structopt(
        short,
        long,
        parse(from_occurrences),
        help = "log progress to stderr (repeat for more)"
    )]
    pub verbose: u8,
}

impl Options {
    pub fn parse() -> Self {
        Self::from_args()
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::from_iter(&["resolute", "kb.txt"]);
        assert_eq!(options.path, PathBuf::from("kb.txt"));
        assert!(matches!(options.output, Output::Transcript));
        assert_eq!(options.steps, None);
        assert!(!options.statistics);
        assert_eq!(options.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn flags() {
        let options = Options::from_iter(&[
            "resolute",
            "--output",
            "silent",
            "--steps",
            "10",
            "--statistics",
            "-vv",
            "kb.txt",
        ]);
        assert!(matches!(options.output, Output::Silent));
        assert_eq!(options.steps, Some(10));
        assert!(options.statistics);
        assert_eq!(options.log_level(), LevelFilter::Debug);
    }
}
