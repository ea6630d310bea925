use std::process;
use clap::{Parser, Subcommand};
use log::debug;
use fixbin::lib_util::{fixbin_version_code, init_logging, log_level_from_env};
use fixbin::{decode_slice, encode, CodecError, Endian};

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print the bytes of an integer as hex
    Encode {
        /// One of i8, u8, i16, u16, i32, u32, i64, u64
        kind: String,
        /// Decimal, or hex with a 0x prefix
        value: String,
        /// big, little or native
        #[arg(default_value = "native")]
        order: String,
    },
    /// Print the integer held by a hex byte string
    Decode {
        kind: String,
        bytes: String,
        #[arg(default_value = "native")]
        order: String,
    },
}

#[derive(Parser, Debug)]
#[command(name = "fixbin", version, about = "Fixed-width integer byte codec")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

// Each kind is paired with the unsigned kind of the same width.
macro_rules! dispatch_kind {
    ($kind:expr, $body:ident) => {
        match $kind {
            "i8" => $body!(i8, u8),
            "u8" => $body!(u8, u8),
            "i16" => $body!(i16, u16),
            "u16" => $body!(u16, u16),
            "i32" => $body!(i32, u32),
            "u32" => $body!(u32, u32),
            "i64" => $body!(i64, u64),
            "u64" => $body!(u64, u64),
            other => Err(CodecError::UnknownKind(other.to_string())),
        }
    };
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

fn encode_value(kind: &str, value: &str, order: Endian) -> Result<String, CodecError> {
    let invalid = || CodecError::InvalidValue(value.to_string());
    macro_rules! encode_as {
        ($t:ty, $u:ty) => {{
            // Hex is a bit pattern, so signed kinds take it through the unsigned kind.
            let v = match strip_hex_prefix(value) {
                Some(digits) => <$u>::from_str_radix(digits, 16).map_err(|_| invalid())? as $t,
                None => value.parse::<$t>().map_err(|_| invalid())?,
            };
            Ok(hex::encode(encode(v, order)))
        }};
    }
    dispatch_kind!(kind, encode_as)
}

fn decode_value(kind: &str, bytes: &str, order: Endian) -> Result<String, CodecError> {
    let digits = strip_hex_prefix(bytes).unwrap_or(bytes);
    let raw = hex::decode(digits).map_err(|_| CodecError::InvalidValue(bytes.to_string()))?;
    macro_rules! decode_as {
        ($t:ty, $_u:ty) => {{
            let v: $t = decode_slice(&raw, order)?;
            Ok(v.to_string())
        }};
    }
    dispatch_kind!(kind, decode_as)
}

fn run(cli: Cli) -> Result<String, CodecError> {
    match cli.command {
        Command::Encode { kind, value, order } => {
            let order = order.parse::<Endian>()?;
            debug!("Encoding {} as {} ({} endian).", value, kind, order.name());
            encode_value(&kind, &value, order)
        }
        Command::Decode { kind, bytes, order } => {
            let order = order.parse::<Endian>()?;
            debug!("Decoding {} as {} ({} endian).", bytes, kind, order.name());
            decode_value(&kind, &bytes, order)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logging(log_level_from_env()) {
        eprintln!("{}", e);
    }
    debug!("fixbin {}", fixbin_version_code());

    match run(cli) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
