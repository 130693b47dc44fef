use getarg::{cli, proc};
use getarg::{Cli, Error, ExitCode, Program, Ready};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
    let cli = match Cli::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(e.code());
        }
    };
    for key in cli.keys() {
        log::debug!("{}={:?}", key, cli.get_arg(key, ""));
    }
    if cli.get_bool_arg("-help", false) == true {
        print!("{}", HELP);
        return ExitCode::SUCCESS;
    }
    cli.go::<Demo>()
}

struct Demo {
    name: String,
    count: u8,
    shout: bool,
}

impl Program for Demo {
    fn interpret(cli: &Cli<Ready>) -> cli::Result<Self> {
        Ok(Demo {
            name: cli.get_arg("-name", "world"),
            count: Error::validate(u8::try_from(cli.get_int_arg("-count", 1)))?,
            shout: cli.get_bool_arg("-shout", false),
        })
    }

    fn execute(self) -> proc::Result {
        for _ in 0..self.count {
            match self.shout {
                true => println!("HELLO {}!", self.name.to_uppercase()),
                false => println!("Hello {}!", self.name),
            }
        }
        Ok(())
    }
}

const HELP: &str = "\
Greets someone a number of times.

Usage:
    demo [options]

Options:
    -name=<name>        Name of the person to greet (default: world)
    -count=<n>          Number of times to greet (default: 1)
    -shout, -noshout    Greet in capital letters
    -help               Print this help information and exit

Set RUST_LOG=debug to log how the parameters were parsed.
";
