use iced_atlas::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        google_key: args
            .opt_value_from_str("--google-key")
            .unwrap()
            .or_else(|| std::env::var("GOOGLE_MAPS_API_KEY").ok()),
    };

    app::run(flags)
}
