use crate::conf::{ConfigError, load_config};
use crate::library::Collection;
use miette::Report;
use std::path::Path;

pub fn check(path: &Path, plain: bool) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ listening on {}", cfg.server.listen);
            println!("✔ media prefix {}", cfg.server.prefix);
            println!("✔ {} movies", cfg.library.count(Collection::Movies));
            println!("✔ {} tv shows", cfg.library.count(Collection::TvShows));
            Ok(())
        }
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);
    if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "The config directory must contain a mediaway.hcl entrypoint.\n\
             \n\
             Example:\n\
             \n\
             server = {\n\
             \x20 version = 1\n\
             \x20 listen  = \"0.0.0.0:8008\"\n\
             }\n\
             library = \"library.hcl\"",
        ),

        ConfigError::DuplicateEntity { .. } => Some(
            "Each id may appear only once per collection.\n\
             \n\
             The same id may be used once under `movies` and once under `tvshows`.",
        ),

        ConfigError::RelativeRoot { .. } => Some(
            "Library roots are resolved as-is and must be absolute.\n\
             \n\
             Example:\n\
             \n\
             movies = [\n\
             \x20 { id = \"5d0c6f6e-3f4e-4b8b-9d5c-2f9a0b1c7e11\", path = \"/srv/media/Heat (1995)\" },\n\
             ]",
        ),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_cover_library_errors() {
        let err = ConfigError::RelativeRoot {
            collection: Collection::Movies,
            id: "x".to_string(),
            path: "movies/heat".into(),
        };
        assert!(config_error_hint(&err).is_some());

        let err = ConfigError::InvalidVersion { version: 3 };
        assert!(config_error_hint(&err).is_none());
    }
}
