use anyhow::Result;
use hexpack::logging::{init_logging, LoggingConfig};
use hexpack::{ColorRgba, PackedColor};

mod args;

use args::{Command, TopLevel};

fn main() -> Result<()> {
    let cli: TopLevel = argh::from_env();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::quiet()
    });
    log::debug!("command: {:?}", cli.command);

    match cli.command {
        Command::Pack(cmd) => {
            print_word(hexpack::pack(cmd.r, cmd.g, cmd.b, cmd.a));
        }
        Command::Unpack(cmd) => {
            print_word(cmd.word);
            print_color(hexpack::unpack(cmd.word));
        }
        Command::Alpha(cmd) => {
            println!("{:.6}", hexpack::extract_alpha(cmd.word));
        }
        Command::Parse(cmd) => {
            print_word(cmd.color);
            print_color(cmd.color.unpack());
        }
    }

    Ok(())
}

fn print_word(packed: PackedColor) {
    println!("u32  {:#010x}", packed.to_u32());
    println!("i32  {}", packed.to_i32());
    println!("hex  {packed}");
}

fn print_color(c: ColorRgba) {
    println!("rgba {:.6} {:.6} {:.6} {:.6}", c.r, c.g, c.b, c.a);
}
