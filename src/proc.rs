use crate::cli;
use crate::cli::states::Ready;
use crate::cli::Cli;
use crate::error::exit_code;
use std::process::ExitCode;

pub type Result = std::result::Result<(), Box<dyn std::error::Error>>;

pub trait Program: Sized {
    /// Reads the parameters from the finalized [Cli] to define a struct's fields.
    ///
    /// Missing or malformed parameters are never errors by themselves; return
    /// an [Error][crate::Error] here when the program requires otherwise.
    fn interpret(cli: &Cli<Ready>) -> cli::Result<Self>;

    /// Run the backend logic for this program.
    ///
    /// This function owns the self structure.
    fn execute(self) -> Result;
}

impl Cli<Ready> {
    /// Interprets the parameters as the program `P` and executes it.
    ///
    /// Errors from either step are reported on stderr and mapped to a failing
    /// exit code.
    pub fn go<P: Program>(&self) -> ExitCode {
        ExitCode::from(self.run::<P>())
    }

    /// Glues the interface layer and backend logic, returning the raw exit code.
    fn run<P: Program>(&self) -> u8 {
        let program = match P::interpret(self) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("error: {}", e);
                return e.code();
            }
        };
        match program.execute() {
            Ok(()) => exit_code::OKAY,
            Err(e) => {
                eprintln!("error: {}", e);
                exit_code::BAD
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    /// Example program that repeats a greeting.
    #[derive(Debug, PartialEq)]
    struct Greet {
        name: String,
        count: i64,
        loud: bool,
    }

    impl Program for Greet {
        fn interpret(cli: &Cli<Ready>) -> cli::Result<Self> {
            let count = cli.get_int_arg("-count", 1);
            if count < 0 {
                return Err(Error::custom(format!("count cannot be negative: {}", count)));
            }
            Ok(Greet {
                name: cli.get_arg("-name", "world"),
                count,
                loud: cli.get_bool_arg("-loud", false),
            })
        }

        fn execute(self) -> Result {
            for line in self.run() {
                println!("{}", line);
            }
            Ok(())
        }
    }

    impl Greet {
        fn run(&self) -> Vec<String> {
            let text = match self.loud {
                true => format!("HELLO {}!", self.name.to_uppercase()),
                false => format!("Hello {}!", self.name),
            };
            (0..self.count).map(|_| text.clone()).collect()
        }
    }

    /// Example program whose backend always fails.
    struct Broken;

    impl Program for Broken {
        fn interpret(_: &Cli<Ready>) -> cli::Result<Self> {
            Ok(Broken)
        }

        fn execute(self) -> Result {
            Err("disk is full".into())
        }
    }

    #[test]
    fn interpret_program() {
        let cli = Cli::from_args(["-name=gates", "-count=2", "-noloud"]);
        let greet = Greet::interpret(&cli).unwrap();
        assert_eq!(
            greet,
            Greet {
                name: "gates".to_string(),
                count: 2,
                loud: false,
            }
        );
        assert_eq!(greet.run(), vec!["Hello gates!", "Hello gates!"]);

        let cli = Cli::from_args(["-loud"]);
        let greet = Greet::interpret(&cli).unwrap();
        assert_eq!(greet.run(), vec!["HELLO WORLD!"]);
    }

    #[test]
    fn interpret_custom_rule() {
        let cli = Cli::from_args(["-count=-3"]);
        let err = Greet::interpret(&cli).unwrap_err();
        assert_eq!(err.to_string(), "count cannot be negative: -3");
    }

    #[test]
    fn go_exit_codes() {
        assert_eq!(Cli::from_args(["-count=0"]).run::<Greet>(), 0);
        assert_eq!(Cli::from_args(["-count=-1"]).run::<Greet>(), 101);
        assert_eq!(Cli::from_args(["-snc"]).run::<Broken>(), 101);
    }
}
