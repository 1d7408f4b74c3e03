use crate::config::Config;
use crate::input;
use crate::utils::Utils;
use anyhow::Result;
use crossterm::style::Stylize;
use std::io::{self, Write};
use std::process::{Command, Stdio};

pub struct Shell {
    config: Config,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The prompt loop: print prompt, read a line, dispatch, repeat until
    /// the `exit` builtin terminates the process or input ends.
    pub fn run_interactive(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut reader = stdin.lock();

        loop {
            self.display_prompt()?;
            match input::read_line(&mut reader, self.config.line_limit)? {
                Some(line) => self.execute_command(&line)?,
                // End of input is a clean termination signal, like `exit`.
                None => break,
            }
        }
        Ok(())
    }

    /// Tokenize one line and dispatch it: built-ins run in-process, anything
    /// else is launched as a child. Command errors are reported to stderr
    /// and never abort the loop.
    pub fn execute_command(&mut self, line: &str) -> Result<()> {
        let argv = Utils::split_args(line);
        let Some(&name) = argv.first() else {
            return Ok(());
        };

        match name {
            // Trailing tokens are ignored, `exit now` still exits with 0.
            "exit" => std::process::exit(0),
            "cd" => self.change_dir(argv.get(1).copied()),
            _ => self.run_external(&argv),
        }
        Ok(())
    }

    /// `cd` builtin. Without an argument it changes to `$HOME` when set and
    /// does nothing otherwise.
    fn change_dir(&self, target: Option<&str>) {
        let target = match target {
            Some(path) => path.to_string(),
            None => match Utils::home_dir() {
                Some(home) => home,
                None => return,
            },
        };
        if let Err(err) = std::env::set_current_dir(&target) {
            eprintln!("cd: {}: {}", target, err);
        }
    }

    /// Launch `argv[0]` as a child process with `argv[1..]` as arguments,
    /// resolved through the OS's PATH search, and block until it terminates.
    ///
    /// Two failure modes stay distinct: a name that resolves to nothing
    /// (`NotFound`) versus a host-side failure to create the child at all.
    /// Both are non-fatal.
    fn run_external(&self, argv: &[&str]) {
        let name = argv[0];
        let spawned = Command::new(name)
            .args(&argv[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn();

        match spawned {
            Ok(mut child) => match child.wait() {
                // The exit status is observed but not acted on.
                Ok(status) => log::debug!("{} exited with {}", name, status),
                Err(err) => eprintln!("msh: failed to wait for {}: {}", name, err),
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                eprintln!("{} is not a valid command or script.", name.red());
            }
            Err(err) => {
                log::debug!("spawn failed for {}: {}", name, err);
                eprintln!("Failed to start process.");
            }
        }
    }

    fn display_prompt(&self) -> Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(Utils::format_prompt(self.config.color).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
