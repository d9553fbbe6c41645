use resolute::io::report::{PrintStatistics, PrintTranscript};
use resolute::io::{exit, input, log, verdict};
use resolute::options::{Options, Output};
use resolute::prelude::*;
use resolute::record::Silent;
use resolute::search::{Outcome, Search};
use resolute::statistics::Statistics;

fn refute<R: Record>(
    search: Search,
    knowledge: &mut KnowledgeBase,
    record: &mut R,
    statistics: &mut Statistics,
) -> Outcome {
    knowledge.record_all(record);
    search.run(knowledge, record, statistics)
}

fn main() {
    let options = Options::parse();
    log::start_logging(options.log_level());

    let mut knowledge = input::load(&options.path).unwrap_or_else(|err| {
        eprintln!("{}: {}", options.path.display(), err);
        exit::failure()
    });
    let search = Search::new(options.steps);
    let mut statistics = Statistics::new(&knowledge);
    let outcome = match options.output {
        Output::Transcript => refute(
            search,
            &mut knowledge,
            &mut PrintTranscript,
            &mut statistics,
        ),
        Output::Silent => {
            refute(search, &mut knowledge, &mut Silent, &mut statistics)
        }
    };

    if outcome.is_valid() {
        verdict::valid();
    } else {
        verdict::fail();
    }
    if options.statistics {
        statistics.record(&mut PrintStatistics);
    }
    if outcome.is_valid() {
        exit::success()
    } else {
        exit::failure()
    }
}
