use mosaic_cipher::{logger, report, util};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().skip(1).filter(|a| *a != "--json").collect();

    if positional.len() != 1 {
        eprintln!("Usage: {} <ciphertext|path> [--json]", args[0]);
        std::process::exit(1);
    }

    logger::setup_logger();

    let ciphertext = util::data_source(positional[0])?;
    let result = mosaic_cipher::decode(&ciphertext);

    if json {
        println!("{}", report::render(&result));
    }
    match result {
        Ok(raw) => {
            if !json {
                println!("Decoded bytes (hex): {}", hex::encode(&raw));
                println!("Decoded text: {}", report::display_text(&raw));
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Decoding error: {e}");
            std::process::exit(2);
        }
    }
}
