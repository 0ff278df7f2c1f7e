use clap::{arg,crate_version,Command};
use striplzw::lzw;

const RCH: &str = "unreachable was reached";

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::init();

    let long_help =
"Examples:
---------
Compress:      `striplzw compress -i my_strip -o my_strip.lzw`
Expand:        `striplzw expand -i my_strip.lzw -o my_strip -s 65536`

The expanded size must be given to `expand` because LZW strips do not
record their decoded length; the output is shortened to whatever the
strip actually holds.";

    let mut main_cmd = Command::new("striplzw")
        .about("Compress and expand TIFF LZW strips")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("compress")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path").required(true))
        .about("compress a file as one strip"));

    main_cmd = main_cmd.subcommand(Command::new("expand")
        .arg(arg!(-i --input <PATH> "input path").required(true))
        .arg(arg!(-o --output <PATH> "output path").required(true))
        .arg(arg!(-s --size <BYTES> "upper bound on the expanded size").required(true))
        .about("expand a file holding one strip"));

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("compress") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let dat = std::fs::read(path_in)?;
        let compressed = lzw::compress_slice(&dat)?;
        std::fs::write(path_out,compressed)?;
    }

    if let Some(cmd) = matches.subcommand_matches("expand") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let size = cmd.get_one::<String>("size").expect(RCH).parse::<usize>()?;
        let dat = std::fs::read(path_in)?;
        let expanded = match lzw::expand_slice(&dat,size) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{}",e);
                return Err(Box::new(e));
            }
        };
        std::fs::write(path_out,expanded)?;
    }

    Ok(())
}
