use clap::Parser;

use dephasage_thermique::{app, cli::Args, i18n};

/// Point d'entrée : journalisation, arguments, calcul, affichage.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match app::run(&args) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            let tr = i18n::Translator::new(args.langue);
            eprintln!("{}: {}", tr.t(i18n::keys::ERROR_PREFIX), err.localized(&tr));
            std::process::exit(1);
        }
    }
}
