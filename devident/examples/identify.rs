//! Identify the running device
//!
//! Reads the host identifiers, or the ones given on the command line:
//!
//! ```text
//! cargo run --example identify -- a3lte SM-A300F
//! ```

use devident::{FixedSource, Identifier};
use tracing_subscriber::EnvFilter;

fn main() -> devident::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let mut args = std::env::args().skip(1);

    let info = match (args.next(), args.next()) {
        (Some(device), model) => Identifier::new()
            .with_source(FixedSource::new(device, model.unwrap_or_default()))
            .try_identify()?,
        (None, _) => Identifier::new().try_identify()?,
    };

    if info.found {
        println!("✓ Device: {}", info);
    } else {
        println!("✗ Device not in database");
    }
    println!("{}", info.to_json());

    Ok(())
}
