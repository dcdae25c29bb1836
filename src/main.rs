use clap::Parser;
use std::io::{BufRead, Write};
use std::process;

use memsh::shell::{Shell, ShellOptions};
use memsh::vfs::VirtualFilesystem;

#[derive(Parser)]
#[command(name = "memsh")]
#[command(about = "A shell emulator over an in-memory virtual filesystem")]
#[command(version)]
struct Cli {
    /// CSV image describing the virtual filesystem
    vfs: String,

    /// Run commands from a script file instead of stdin
    #[arg(short = 'f', long = "script")]
    script: Option<String>,

    /// Name shown in the prompt
    #[arg(long, default_value = "memsh")]
    name: String,

    /// Initial working directory inside the VFS
    #[arg(long)]
    cwd: Option<String>,

    /// With --script, output aggregated results as JSON (stdout, stderr, exitCode)
    #[arg(long)]
    json: bool,

    /// Print the resolved image path before starting
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let vfs = match VirtualFilesystem::load(&cli.vfs) {
        Ok(vfs) => vfs,
        Err(e) => {
            eprintln!("memsh: {}", e);
            process::exit(1);
        }
    };

    if cli.debug {
        let resolved = std::fs::canonicalize(&cli.vfs)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| cli.vfs.clone());
        println!("[debug] loaded vfs image: {}", resolved);
    }

    let mut shell = Shell::new(
        vfs,
        ShellOptions {
            name: Some(cli.name),
            cwd: cli.cwd,
        },
    );

    let exit_code = match cli.script {
        Some(ref file) => run_script(&mut shell, file, cli.json),
        None => run_interactive(&mut shell),
    };
    process::exit(exit_code);
}

/// Execute a command script: blank lines and `#` comments are skipped, each
/// executed line is echoed under its prompt, and the run stops as soon as
/// the session's running flag goes false.
fn run_script(shell: &mut Shell, file: &str, json: bool) -> i32 {
    let script = match std::fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("memsh: cannot read script file '{}': {}", file, e);
            return 1;
        }
    };

    let mut stdout_acc = String::new();
    let mut stderr_acc = String::new();

    for line in script.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !json {
            println!("{}{}", shell.prompt(), line);
        }
        let result = shell.exec_line(line);
        if json {
            stdout_acc.push_str(&result.stdout);
            stderr_acc.push_str(&result.stderr);
        } else {
            print!("{}", result.stdout);
            eprint!("{}", result.stderr);
        }
        if !shell.is_running() {
            break;
        }
    }

    if json {
        println!(
            "{}",
            serde_json::json!({
                "stdout": stdout_acc,
                "stderr": stderr_acc,
                "exitCode": shell.last_exit_code(),
            })
        );
        0
    } else {
        shell.last_exit_code()
    }
}

/// Interactive loop: prompt, read one line, execute, print, until EOF or the
/// `exit` builtin clears the running flag.
fn run_interactive(shell: &mut Shell) -> i32 {
    let stdin = std::io::stdin();
    let mut input = String::new();

    while shell.is_running() {
        print!("{}", shell.prompt());
        let _ = std::io::stdout().flush();

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("memsh: read error: {}", e);
                break;
            }
        }

        let result = shell.exec_line(input.trim());
        print!("{}", result.stdout);
        eprint!("{}", result.stderr);
    }
    shell.last_exit_code()
}
