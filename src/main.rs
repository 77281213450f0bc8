use iced_drift::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let start_page = match args.opt_value_from_str("--page") {
        Ok(page) => page,
        Err(err) => {
            eprintln!("Ignoring invalid --page value: {err}");
            None
        }
    };

    let flags = Flags {
        start_page,
        reduced_motion: args.contains("--reduced-motion"),
    };

    app::run(flags)
}
