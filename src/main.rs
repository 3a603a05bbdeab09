use iced_folio::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
iced_folio - photography portfolio viewer

USAGE:
  iced_folio [PORTFOLIO_DIR]

ARGS:
  [PORTFOLIO_DIR]  Directory with one subdirectory per category
                   (an optional hero/ subdirectory feeds the slideshow)

OPTIONS:
  -h, --help       Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        portfolio_dir: args.finish().into_iter().next().map(PathBuf::from),
    };

    app::run(flags)
}
