use mosaic_cipher::{DecryptOptions, config, logger, report, util};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().skip(1).filter(|a| *a != "--json").collect();

    if positional.is_empty() || positional.len() > 2 {
        eprintln!("Usage: {} <ciphertext|path> [key] [--json]", args[0]);
        std::process::exit(1);
    }

    logger::setup_logger();

    let ciphertext = util::data_source(positional[0])?;
    let key = config::resolve_key(positional.get(1).map(|k| k.to_string()));
    if key.is_none() {
        log::warn!("No key set, using default key");
    }
    let options = DecryptOptions::with_key(key.as_deref());

    let result = mosaic_cipher::decrypt(&ciphertext, &options);

    if json {
        println!("{}", report::render(&result));
    }
    match result {
        Ok(plain) => {
            if !json {
                println!("Decoded bytes (hex): {}", hex::encode(&plain));
                println!("Decoded text: {}", report::display_text(&plain));
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Decryption failed: {e}");
            std::process::exit(2);
        }
    }
}
