use getarg::{cli, proc};
use getarg::{Cli, Error, ExitCode, Program, Ready};

fn main() -> ExitCode {
    env_logger::init();
    match Cli::from_env() {
        Ok(cli) => cli.go::<Sum>(),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.code())
        }
    }
}

type Digit = i64;

/// [Sum] adds together every `-num` given on the command-line.
#[derive(PartialEq, Debug)]
struct Sum {
    nums: Vec<Digit>,
    verbose: bool,
}

impl Sum {
    fn run(&self) -> Digit {
        self.nums.iter().fold(Digit::default(), |acc, x| acc.saturating_add(*x))
    }
}

impl Program for Sum {
    fn interpret(cli: &Cli<Ready>) -> cli::Result<Self> {
        let nums: Vec<Digit> = cli
            .get_args("-num")
            .iter()
            .map(|n| getarg::value::to_int(n))
            .collect();
        if nums.is_empty() == true {
            return Err(Error::custom("at least one \"-num=<n>\" is required"));
        }
        Ok(Sum {
            nums,
            verbose: cli.get_bool_arg("-verbose", false),
        })
    }

    fn execute(self) -> proc::Result {
        let sum: Digit = self.run();
        if self.verbose == true {
            println!("{:?} = {}", self.nums, sum);
        } else {
            println!("{}", sum);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn backend_logic() {
        let app = Sum {
            nums: vec![1, 2, 3],
            verbose: false,
        };

        assert_eq!(app.run(), 6);
    }

    #[test]
    fn collects_every_num() {
        let cli = Cli::from_args(["-num=10", "--num=20", "-verbose", "-num=x"]);
        let app = Sum::interpret(&cli).unwrap();
        assert_eq!(app.nums, vec![10, 20, 0]);
        assert_eq!(app.verbose, true);
        assert_eq!(app.run(), 30);
    }

    #[test]
    fn requires_a_num() {
        let cli = Cli::from_args(["-verbose"]);
        assert!(Sum::interpret(&cli).is_err());
    }
}
